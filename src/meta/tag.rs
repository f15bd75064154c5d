//! A single `<meta name=... content=...>` element.

use crate::utils::html::escape_attr;
use std::fmt;

/// One name/content pair, rendered as a `<meta>` element.
///
/// The prefix is kept apart from the name so that collections can apply
/// their namespace (e.g. `twitter:`) at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meta<'a> {
    pub prefix: &'a str,
    pub name: &'a str,
    pub content: &'a str,
}

impl<'a> Meta<'a> {
    pub const fn new(name: &'a str, content: &'a str) -> Self {
        Self {
            prefix: "",
            name,
            content,
        }
    }

    pub const fn with_prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Meta<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<meta name=\"{}{}\" content=\"{}\">",
            escape_attr(self.prefix),
            escape_attr(self.name),
            escape_attr(self.content)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        assert_eq!(
            Meta::new("robots", "noindex, nofollow").render(),
            r#"<meta name="robots" content="noindex, nofollow">"#
        );
    }

    #[test]
    fn test_render_with_prefix() {
        let meta = Meta::new("card", "summary").with_prefix("twitter:");
        assert_eq!(
            meta.render(),
            r#"<meta name="twitter:card" content="summary">"#
        );
    }

    #[test]
    fn test_render_escapes_attributes() {
        let meta = Meta::new("title", r#"Fish & "Chips" <3"#);
        assert_eq!(
            meta.render(),
            r#"<meta name="title" content="Fish &amp; &quot;Chips&quot; &lt;3">"#
        );
    }

    #[test]
    fn test_render_empty_content() {
        assert_eq!(
            Meta::new("description", "").render(),
            r#"<meta name="description" content="">"#
        );
    }
}
