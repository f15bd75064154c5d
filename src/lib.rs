//! Render SEO `<meta>` tags from configuration.
//!
//! Two entities share one ordered tag store:
//!
//! ```text
//! SeoConfig ─┬─ [misc]    ──► MiscTags     ─┐
//!            └─ [twitter] ──► twitter::Card ─┴─► MetaCollection ──► "<meta ...>\n<meta ...>"
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use seo_tags::{MiscTags, MiscTagsConfig, twitter::Card, TwitterConfig};
//!
//! let mut misc = MiscTags::new(MiscTagsConfig { canonical: true, ..Default::default() });
//! misc.set_url("https://example.com/post/");
//!
//! let mut card = Card::new(TwitterConfig::default())?;
//! card.set_type("summary_large_image")?.set_site("arcanedev");
//! card.add_image("https://example.com/cover.png");
//!
//! println!("{misc}\n{card}");
//! ```

pub mod config;
pub mod entities;
pub mod error;
pub mod logger;
pub mod meta;
mod utils;

pub use config::{ConfigError, MiscTagsConfig, SeoConfig, TwitterConfig};
pub use entities::{MiscTags, twitter};
pub use error::InvalidCardType;
pub use meta::{Meta, MetaCollection};
