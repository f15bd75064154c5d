//! `check` command: validate the config file.

use anyhow::Result;
use seo_tags::config::util::is_http_url;
use seo_tags::{SeoConfig, log};

pub fn run_check(url: Option<&str>, config: &SeoConfig) -> Result<()> {
    if let Some(url) = url
        && !is_http_url(url)
    {
        log!("warning"; "'{}' is not an absolute http(s) url, canonical links should be absolute", url);
    }

    config.validate()?;
    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seo_tags::ConfigError;

    #[test]
    fn test_check_valid_config() {
        let config = SeoConfig::from_str("[twitter]\ncard = \"app\"").unwrap();
        assert!(run_check(Some("/relative"), &config).is_ok());
    }

    #[test]
    fn test_check_reports_diagnostics() {
        let config = SeoConfig::from_str("[twitter]\ncard = true").unwrap();
        let err = run_check(None, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Diagnostics(_))
        ));
    }
}
