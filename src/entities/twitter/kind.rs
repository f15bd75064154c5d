//! Twitter card types.

use crate::config::util::is_truthy;
use crate::error::InvalidCardType;
use std::{fmt, str::FromStr};
use toml::Value;

/// Supported `twitter:card` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardType {
    App,
    Gallery,
    Photo,
    Player,
    Product,
    #[default]
    Summary,
    SummaryLargeImage,
}

impl CardType {
    pub const ALL: [CardType; 7] = [
        Self::App,
        Self::Gallery,
        Self::Photo,
        Self::Player,
        Self::Product,
        Self::Summary,
        Self::SummaryLargeImage,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Gallery => "gallery",
            Self::Photo => "photo",
            Self::Player => "player",
            Self::Product => "product",
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
        }
    }

    /// Comma-separated list of every supported value, for hints.
    pub fn supported() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }

    /// Parse a configured card value.
    ///
    /// Empty values (`""`, `false`, `0`, empty arrays/tables) mean "not set"
    /// and yield `Ok(None)`. Any other non-string value is rejected.
    pub fn from_value(value: &Value) -> Result<Option<Self>, InvalidCardType> {
        match value {
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => s.parse().map(Some),
            other if !is_truthy(other) => Ok(None),
            other => Err(InvalidCardType::NotAString(other.type_str())),
        }
    }
}

impl FromStr for CardType {
    type Err = InvalidCardType;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or(InvalidCardType::Unsupported(normalized))
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
