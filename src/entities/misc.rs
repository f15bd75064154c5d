//! Miscellaneous tags: canonical link, robots block and default metas.

use crate::config::MiscTagsConfig;
use crate::debug;
use crate::meta::MetaCollection;
use std::fmt;

/// Content of the robots entry when crawlers are blocked.
pub const ROBOTS_BLOCK: &str = "noindex, nofollow";

/// Canonical / robots / default meta entries for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiscTags {
    config: MiscTagsConfig,
    current_url: String,
    metas: MetaCollection,
}

impl MiscTags {
    pub fn new(config: MiscTagsConfig) -> Self {
        let mut tags = Self {
            config,
            current_url: String::new(),
            metas: MetaCollection::new(),
        };
        tags.init();
        tags
    }

    /// Build from default entries only (canonical and robots disabled).
    pub fn make<I, K, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(MiscTagsConfig::with_defaults(defaults))
    }

    fn init(&mut self) {
        self.add_canonical();
        self.add_robots_meta();
        let defaults = self.config.default.clone();
        self.add_many(defaults);
    }

    pub fn config(&self) -> &MiscTagsConfig {
        &self.config
    }

    pub fn url(&self) -> &str {
        &self.current_url
    }

    /// Set the current URL and add the canonical entry if now eligible.
    ///
    /// An empty URL leaves an existing canonical entry in place.
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.current_url = url.into();
        self.add_canonical();
        self
    }

    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.metas.add(name, content);
        self
    }

    pub fn add_many<I, K, V>(&mut self, metas: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metas.add_many(metas);
        self
    }

    pub fn remove<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.metas.remove(names);
        self
    }

    /// Clear every entry, including canonical/robots/defaults.
    pub fn reset(&mut self) -> &mut Self {
        self.metas.reset();
        self
    }

    pub fn metas(&self) -> &MetaCollection {
        &self.metas
    }

    pub fn render(&self) -> String {
        self.metas.render()
    }

    fn has_url(&self) -> bool {
        !self.current_url.is_empty()
    }

    fn add_robots_meta(&mut self) {
        if self.config.robots {
            self.add("robots", ROBOTS_BLOCK);
        }
    }

    fn add_canonical(&mut self) {
        if !self.config.canonical {
            return;
        }
        if self.has_url() {
            let url = self.current_url.clone();
            self.add("canonical", url);
        } else {
            debug!("misc"; "canonical enabled but no url set yet");
        }
    }
}

impl Default for MiscTags {
    fn default() -> Self {
        Self::new(MiscTagsConfig::default())
    }
}

impl fmt::Display for MiscTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
