//! `init` command: write a starter `seo.toml`.

use anyhow::{Context, Result, bail};
use seo_tags::{SeoConfig, TwitterConfig, log};
use std::{fs, path::Path};

/// Starter config: every section present with its defaults.
fn starter_config() -> SeoConfig {
    SeoConfig {
        twitter: TwitterConfig {
            card: Some(toml::Value::String("summary".into())),
            ..TwitterConfig::default()
        },
        ..SeoConfig::default()
    }
}

pub fn run_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite it",
            path.display()
        );
    }

    let content = starter_config().to_toml()?;
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
