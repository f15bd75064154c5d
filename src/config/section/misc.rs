//! `[misc]` section configuration.
//!
//! Controls the canonical link, the robots block and site-wide default metas.
//!
//! # Example
//!
//! ```toml
//! [misc]
//! canonical = true     # Emit <meta name="canonical"> once a URL is known
//! robots = false       # Emit robots = "noindex, nofollow"
//!
//! [misc.default]
//! viewport = "width=device-width, initial-scale=1"
//! author = "ARCANEDEV"
//! ```
//!
//! Values are coerced leniently: `robots = 1` or `robots = "yes"` enable the
//! block, a non-table `default` is treated as empty.

use crate::config::util::{deserialize_string_map, deserialize_truthy};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiscTagsConfig {
    /// Add a canonical entry for the current URL.
    #[serde(deserialize_with = "deserialize_truthy")]
    pub canonical: bool,

    /// Block crawlers with `noindex, nofollow`.
    #[serde(deserialize_with = "deserialize_truthy")]
    pub robots: bool,

    /// Extra entries merged after canonical/robots, in document order.
    #[serde(deserialize_with = "deserialize_string_map")]
    pub default: IndexMap<String, String>,
}

impl MiscTagsConfig {
    /// Config holding only default entries.
    pub fn with_defaults<I, K, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            default: defaults
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_misc_config_defaults() {
        let config = test_parse_config("");
        assert!(!config.misc.canonical);
        assert!(!config.misc.robots);
        assert!(config.misc.default.is_empty());
    }

    #[test]
    fn test_misc_config_values() {
        let config = test_parse_config(
            "[misc]\ncanonical = true\nrobots = true\n[misc.default]\nviewport = \"width=device-width\"\nauthor = \"ARCANEDEV\"",
        );
        assert!(config.misc.canonical);
        assert!(config.misc.robots);
        let names: Vec<_> = config.misc.default.keys().map(String::as_str).collect();
        assert_eq!(names, ["viewport", "author"]);
    }

    #[test]
    fn test_misc_config_lenient_values() {
        let config = test_parse_config("[misc]\ncanonical = 1\nrobots = \"\"\ndefault = \"nope\"");
        assert!(config.misc.canonical);
        assert!(!config.misc.robots);
        assert!(config.misc.default.is_empty());
    }

    #[test]
    fn test_with_defaults() {
        let config = super::MiscTagsConfig::with_defaults([("author", "me")]);
        assert!(!config.canonical);
        assert_eq!(config.default.get("author").map(String::as_str), Some("me"));
    }
}
