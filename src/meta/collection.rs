//! Ordered collection of meta entries.
//!
//! Names are unique: adding an existing name overwrites its content but keeps
//! its original position. The prefix is applied when rendering, so changing it
//! affects entries that were added earlier.

use super::Meta;
use indexmap::IndexMap;
use std::fmt;

/// Ordered `name -> content` mapping rendered as `<meta>` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaCollection {
    prefix: String,
    metas: IndexMap<String, String>,
}

impl MetaCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection whose names render with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            metas: IndexMap::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    /// Insert or overwrite an entry.
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.metas.insert(name.into(), content.into());
        self
    }

    /// Add every entry of `metas`, in iteration order.
    pub fn add_many<I, K, V>(&mut self, metas: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, content) in metas {
            self.add(name, content);
        }
        self
    }

    /// Remove entries by name. Absent names are ignored.
    ///
    /// ```ignore
    /// metas.remove(["robots"]);
    /// metas.remove(&["canonical", "robots"]);
    /// ```
    pub fn remove<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            self.metas.shift_remove(name.as_ref());
        }
        self
    }

    /// Drop every entry. The prefix is kept.
    pub fn reset(&mut self) -> &mut Self {
        self.metas.clear();
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.metas.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.metas.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.metas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }

    /// Iterate entries in render order, without the prefix.
    pub fn iter(&self) -> impl Iterator<Item = Meta<'_>> {
        self.metas
            .iter()
            .map(|(name, content)| Meta::new(name, content).with_prefix(&self.prefix))
    }

    /// Render one `<meta>` element per entry, joined by newlines.
    pub fn render(&self) -> String {
        self.iter()
            .map(|meta| meta.render())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for MetaCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
