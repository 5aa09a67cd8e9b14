//! Quote data model

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable quote record.
///
/// Equality is structural: two quotes are equal when content, author and
/// the full tag set match. Tags are kept in a `BTreeSet` so the serialized
/// form is a sorted array and tag order never affects equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Quote {
    /// The quote text
    pub content: String,
    /// Who said it
    pub author: String,
    /// Category labels
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Quote {
    pub fn new<I, S>(content: impl Into<String>, author: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: content.into(),
            author: author.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether the quote carries the given tag (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Single-line form used by exports and notifications: `"<content>" - <author>`
    pub fn display_line(&self) -> String {
        format!("\"{}\" - {}", self.content, self.author)
    }

    /// Case-insensitive substring match against content, author or any tag.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.content.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"\n\n- {}", self.content, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_tag_order() {
        let a = Quote::new("Hi", "Z", ["b", "a"]);
        let b = Quote::new("Hi", "Z", ["a", "b"]);
        assert_eq!(a, b);

        let c = Quote::new("Hi", "Z", ["a"]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_line() {
        let quote = Quote::new("Hi", "Z", Vec::<String>::new());
        assert_eq!(quote.display_line(), "\"Hi\" - Z");
        assert_eq!(quote.to_string(), "\"Hi\"\n\n- Z");
    }

    #[test]
    fn test_json_shape() {
        let quote = Quote::new("Hi", "Z", ["work", "life"]);
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"content": "Hi", "author": "Z", "tags": ["life", "work"]})
        );

        let back: Quote = serde_json::from_value(json).unwrap();
        assert_eq!(back, quote);
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let quote: Quote = serde_json::from_str(r#"{"content":"A","author":"B"}"#).unwrap();
        assert!(quote.tags.is_empty());
    }
}
