//! Twitter card builder.

use super::CardType;
use crate::config::TwitterConfig;
use crate::debug;
use crate::error::InvalidCardType;
use crate::meta::MetaCollection;
use std::fmt;
use toml::Value;

/// `twitter:`-prefixed card tags for one page.
///
/// Built from a [`TwitterConfig`] snapshot; [`Card::reset`] returns to that
/// snapshot. Images are kept apart from the metas and only turned into
/// `image` / `imageN` entries at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    config: TwitterConfig,
    configured_type: Option<CardType>,
    card_type: CardType,
    images: Vec<String>,
    metas: MetaCollection,
}

impl Card {
    /// Cards carry at most this many images; extra ones are dropped.
    pub const MAX_IMAGES: usize = 4;

    /// Build a card, validating the configured card type.
    pub fn new(config: TwitterConfig) -> Result<Self, InvalidCardType> {
        let configured_type = match &config.card {
            Some(value) => CardType::from_value(value)?,
            None => None,
        };

        let mut card = Self {
            metas: MetaCollection::with_prefix(config.prefix.as_str()),
            config,
            configured_type,
            card_type: CardType::default(),
            images: Vec::new(),
        };
        card.init();
        Ok(card)
    }

    /// Apply the config snapshot: prefix, type, site, title, then extra metas.
    fn init(&mut self) {
        self.metas.set_prefix(self.config.prefix.as_str());

        self.card_type = CardType::default();
        if let Some(kind) = self.configured_type {
            self.apply_type(kind);
        }

        let site = self.config.site.clone();
        self.set_site(site);
        let title = self.config.title.clone();
        self.set_title(title);
        let metas = self.config.metas.clone();
        self.add_metas(metas);
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn metas(&self) -> &MetaCollection {
        &self.metas
    }

    /// Set the card type. Empty input is ignored.
    ///
    /// The value is trimmed and lower-cased before validation, so `"SUMMARY"`
    /// is accepted as `summary`.
    pub fn set_type(&mut self, card_type: &str) -> Result<&mut Self, InvalidCardType> {
        if !card_type.is_empty() {
            let kind = card_type.parse()?;
            self.apply_type(kind);
        }
        Ok(self)
    }

    /// Set the card type from a dynamically typed value.
    ///
    /// Non-string values are rejected with their type name, e.g. `[integer]`.
    pub fn set_type_value(&mut self, value: &Value) -> Result<&mut Self, InvalidCardType> {
        if let Some(kind) = CardType::from_value(value)? {
            self.apply_type(kind);
        }
        Ok(self)
    }

    fn apply_type(&mut self, kind: CardType) {
        self.card_type = kind;
        self.metas.add("card", kind.as_str());
    }

    /// Set the site handle, adding a leading `@` when missing. Empty input is ignored.
    pub fn set_site(&mut self, site: impl Into<String>) -> &mut Self {
        let site = site.into();
        if site.is_empty() {
            return self;
        }

        let handle = if site.starts_with('@') {
            site
        } else {
            format!("@{site}")
        };
        self.add_meta("site", handle)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.add_meta("title", title)
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.add_meta("description", description)
    }

    /// Append an image while fewer than [`Card::MAX_IMAGES`] are stored.
    pub fn add_image(&mut self, url: impl Into<String>) -> &mut Self {
        let url = url.into();
        if self.images.len() < Self::MAX_IMAGES {
            self.images.push(url);
        } else {
            debug!("twitter"; "card already has {} images, dropping {}", Self::MAX_IMAGES, url);
        }
        self
    }

    pub fn add_meta(&mut self, name: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.metas.add(name, content);
        self
    }

    pub fn add_metas<I, K, V>(&mut self, metas: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metas.add_many(metas);
        self
    }

    /// Drop metas and images, then re-apply the original config snapshot.
    pub fn reset(&mut self) -> &mut Self {
        self.metas.reset();
        self.images.clear();
        self.init();
        self
    }

    /// Render the card.
    ///
    /// A single image renders as `image`; two or more as `image0`, `image1`, ...
    pub fn render(&self) -> String {
        if self.images.is_empty() {
            return self.metas.render();
        }

        let mut metas = self.metas.clone();
        match self.images.as_slice() {
            [image] => {
                metas.add("image", image.as_str());
            }
            images => {
                for (number, url) in images.iter().enumerate() {
                    metas.add(format!("image{number}"), url.as_str());
                }
            }
        }
        metas.render()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(TwitterConfig::default()).unwrap()
    }

    fn card_with(toml_src: &str) -> Card {
        let config = crate::config::test_parse_config(toml_src);
        Card::new(config.twitter).unwrap()
    }

    fn names(card: &Card) -> Vec<String> {
        card.metas()
            .iter()
            .map(|m| m.name.to_string())
            .collect()
    }

    #[test]
    fn test_default_card() {
        let card = card();
        assert_eq!(card.card_type(), CardType::Summary);
        assert!(card.images().is_empty());
        // title is always applied, even when empty
        assert_eq!(
            card.render(),
            r#"<meta name="twitter:title" content="">"#
        );
    }

    #[test]
    fn test_init_from_config() {
        let card = card_with(
            "[twitter]\ncard = \"Photo\"\nsite = \"arcanedev\"\ntitle = \"Hello\"\n[twitter.metas]\ncreator = \"@me\"",
        );
        assert_eq!(card.card_type(), CardType::Photo);
        assert_eq!(
            card.render(),
            [
                r#"<meta name="twitter:card" content="photo">"#,
                r#"<meta name="twitter:site" content="@arcanedev">"#,
                r#"<meta name="twitter:title" content="Hello">"#,
                r#"<meta name="twitter:creator" content="@me">"#,
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_custom_prefix() {
        let card = card_with("[twitter]\nprefix = \"tw:\"\ntitle = \"x\"");
        assert_eq!(card.render(), r#"<meta name="tw:title" content="x">"#);
    }

    #[test]
    fn test_numeric_site_and_title() {
        let card = card_with("[twitter]
site = 42
title = 7");
        assert_eq!(
            card.render(),
            [
                r#"<meta name="twitter:site" content="@42">"#,
                r#"<meta name="twitter:title" content="7">"#,
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_new_rejects_invalid_config_card() {
        let config = crate::config::test_parse_config("[twitter]\ncard = 42");
        assert_eq!(
            Card::new(config.twitter),
            Err(InvalidCardType::NotAString("integer"))
        );

        let config = crate::config::test_parse_config("[twitter]\ncard = \"poster\"");
        assert_eq!(
            Card::new(config.twitter),
            Err(InvalidCardType::Unsupported("poster".into()))
        );
    }

    #[test]
    fn test_set_type_normalizes() {
        let mut card = card();
        card.set_type("SUMMARY").unwrap();
        assert_eq!(card.card_type(), CardType::Summary);
        assert_eq!(card.metas().get("card"), Some("summary"));

        card.set_type(" summary_large_image ").unwrap();
        assert_eq!(card.metas().get("card"), Some("summary_large_image"));
    }

    #[test]
    fn test_set_type_invalid() {
        let mut card = card();
        let err = card.set_type("invalid").unwrap_err();
        assert_eq!(err, InvalidCardType::Unsupported("invalid".into()));
        assert!(err.to_string().contains("[invalid]"));
        assert_eq!(card.card_type(), CardType::Summary);
        assert!(!card.metas().contains("card"));
    }

    #[test]
    fn test_set_type_value_non_string() {
        let mut card = card();
        let err = card.set_type_value(&Value::Integer(42)).unwrap_err();
        assert!(err.to_string().contains("[integer]"));

        card.set_type_value(&Value::String("player".into())).unwrap();
        assert_eq!(card.card_type(), CardType::Player);
    }

    #[test]
    fn test_set_type_empty_is_noop() {
        let mut card = card();
        card.set_type("").unwrap();
        assert!(!card.metas().contains("card"));
    }

    #[test]
    fn test_set_site_prefixes_handle_once() {
        let mut card = card();
        card.set_site("arcanedev");
        assert_eq!(card.metas().get("site"), Some("@arcanedev"));

        card.set_site("@arcanedev");
        assert_eq!(card.metas().get("site"), Some("@arcanedev"));

        card.set_site("");
        assert_eq!(card.metas().get("site"), Some("@arcanedev"));
    }

    #[test]
    fn test_title_and_description_allow_empty() {
        let mut card = card();
        card.set_title("").set_description("");
        assert_eq!(
            card.render(),
            "<meta name=\"twitter:title\" content=\"\">\n<meta name=\"twitter:description\" content=\"\">"
        );
    }

    #[test]
    fn test_single_image_renders_image() {
        let mut card = card();
        card.add_image("https://x.test/a.png");
        let rendered = card.render();
        assert!(rendered.contains(r#"<meta name="twitter:image" content="https://x.test/a.png">"#));
        assert!(!rendered.contains("twitter:image0"));
    }

    #[test]
    fn test_images_capped_at_four() {
        let mut card = card();
        for i in 0..5 {
            card.add_image(format!("https://x.test/{i}.png"));
        }
        assert_eq!(card.images().len(), Card::MAX_IMAGES);

        let rendered = card.render();
        for i in 0..4 {
            assert!(rendered.contains(&format!(
                r#"<meta name="twitter:image{i}" content="https://x.test/{i}.png">"#
            )));
        }
        assert!(!rendered.contains("image4"));
        assert!(!rendered.contains("twitter:image\""));
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut card = card();
        card.add_image("https://x.test/a.png").add_image("https://x.test/b.png");
        assert_eq!(card.render(), card.render());
        assert!(!card.metas().contains("image0"));
    }

    #[test]
    fn test_add_metas_in_order() {
        let mut card = card();
        card.add_meta("creator", "@me")
            .add_metas([("domain", "x.test"), ("creator", "@you")]);
        assert_eq!(names(&card), ["title", "creator", "domain"]);
        assert_eq!(card.metas().get("creator"), Some("@you"));
    }

    #[test]
    fn test_reset_matches_fresh_card() {
        let src = "[twitter]\ncard = \"gallery\"\nsite = \"arcanedev\"\n[twitter.metas]\ncreator = \"@me\"";
        let fresh = card_with(src);

        let mut card = card_with(src);
        card.set_type("app")
            .unwrap()
            .set_description("changed")
            .add_meta("extra", "1")
            .add_image("https://x.test/a.png");
        card.reset();

        assert_eq!(card.render(), fresh.render());
        assert_eq!(card, fresh);
    }

    #[test]
    fn test_display_matches_render() {
        let mut card = card();
        card.add_image("https://x.test/a.png");
        assert_eq!(card.to_string(), card.render());
    }
}
