//! `[twitter]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [twitter]
//! prefix = "twitter:"         # Namespace prepended to every rendered name
//! card = "summary"            # app | gallery | photo | player | product | summary | summary_large_image
//! site = "arcanedev"          # '@' is added when missing
//! title = "Default title"
//!
//! [twitter.metas]
//! creator = "@arcanedev"
//! ```

use crate::config::util::{deserialize_scalar_string, deserialize_string_map, scalar_to_string};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::entities::twitter::CardType;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Namespace used when `prefix` is missing or not a scalar.
pub const DEFAULT_PREFIX: &str = "twitter:";

/// Twitter card settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    /// Name prefix, `twitter:` by default.
    #[serde(deserialize_with = "deserialize_prefix")]
    pub prefix: String,

    /// Card type, kept raw so a non-string value can be reported as such.
    pub card: Option<toml::Value>,

    /// Site handle.
    #[serde(deserialize_with = "deserialize_scalar_string")]
    pub site: String,

    /// Card title.
    #[serde(deserialize_with = "deserialize_scalar_string")]
    pub title: String,

    /// Extra entries, in document order.
    #[serde(deserialize_with = "deserialize_string_map")]
    pub metas: IndexMap<String, String>,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.into(),
            card: None,
            site: String::new(),
            title: String::new(),
            metas: IndexMap::new(),
        }
    }
}

fn deserialize_prefix<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value).unwrap_or_else(|| DEFAULT_PREFIX.into()))
}

pub struct TwitterConfigFields {
    pub prefix: FieldPath,
    pub card: FieldPath,
}

impl TwitterConfig {
    pub const FIELDS: TwitterConfigFields = TwitterConfigFields {
        prefix: FieldPath::new("twitter.prefix"),
        card: FieldPath::new("twitter.card"),
    };

    /// Validate twitter configuration.
    ///
    /// # Checks
    /// - `card` must be a supported string value
    /// - an empty `prefix` is suspicious (warning only)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(card) = &self.card
            && let Err(err) = CardType::from_value(card)
        {
            diag.error_with_hint(
                Self::FIELDS.card,
                err.to_string(),
                format!("use one of: {}", CardType::supported()),
            );
        }

        if self.prefix.is_empty() {
            diag.warn(
                Self::FIELDS.prefix,
                "empty prefix renders card tags without the `twitter:` namespace",
            );
        }
    }
}
