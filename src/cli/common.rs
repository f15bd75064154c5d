//! Common utilities shared across CLI commands.

use anyhow::{Result, bail};
use seo_tags::config::util::find_config_file;
use seo_tags::{SeoConfig, debug, log};

use super::Cli;

/// Locate and load the config file named by `--config`.
///
/// With `required = false` a missing file falls back to the defaults.
pub fn load_config(cli: &Cli, required: bool) -> Result<SeoConfig> {
    match find_config_file(&cli.config) {
        Some(path) => {
            debug!("config"; "loading {}", path.display());
            Ok(SeoConfig::from_path(&path)?)
        }
        None if required => bail!(
            "config file '{}' not found. Run 'seo-tags init' to create one.",
            cli.config.display()
        ),
        None => {
            log!("warning"; "config file '{}' not found, using defaults", cli.config.display());
            Ok(SeoConfig::default())
        }
    }
}
