//! Configuration utility functions.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use toml::Value;

/// Check that `url_str` is an absolute `http(s)` URL.
///
/// # Examples
/// ```ignore
/// is_http_url("https://example.com/post/")  -> true
/// is_http_url("ftp://example.com")          -> false
/// is_http_url("/relative/path")             -> false
/// ```
pub fn is_http_url(url_str: &str) -> bool {
    url::Url::parse(url_str).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/templates/partials/  ← cwd
/// /home/user/site/seo.toml             ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// lenient value coercion
// ============================================================================

/// Truthiness of an arbitrary TOML value.
///
/// Booleans pass through; numbers are true when non-zero; strings are true
/// unless empty or `"0"`; arrays and tables are true when non-empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Integer(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Table(table) => !table.is_empty(),
        Value::Datetime(_) => true,
    }
}

/// Flatten a TOML table into `name -> content` pairs, preserving order.
///
/// Scalars are stringified, nested arrays/tables are skipped, and any
/// non-table value yields an empty map.
pub fn string_map(value: &Value) -> IndexMap<String, String> {
    let Value::Table(table) = value else {
        return IndexMap::new();
    };

    table
        .iter()
        .filter_map(|(name, content)| scalar_to_string(content).map(|c| (name.clone(), c)))
        .collect()
}

/// String form of a scalar TOML value; `None` for arrays and tables.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(dt) => Some(dt.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}

/// `deserialize_with` adapter for [`is_truthy`].
pub fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// `deserialize_with` adapter for [`scalar_to_string`].
///
/// Arrays and tables become an empty string.
pub fn deserialize_scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value).unwrap_or_default())
}

/// `deserialize_with` adapter for [`string_map`].
pub fn deserialize_string_map<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_map(&value))
}

// ============================================================================
// tests
// ============================================================================
