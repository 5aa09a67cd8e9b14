//! Read-only quote catalog with tag filtering and search

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::builtin::builtin_quotes;
use super::models::Quote;

/// Immutable in-memory catalog of quotes.
///
/// The tag list is computed once at construction. Nothing mutates the
/// catalog afterwards, so it can be shared freely behind an `Arc`.
#[derive(Debug, Clone)]
pub struct QuoteCatalog {
    quotes: Vec<Quote>,
    tags: Vec<String>,
}

impl QuoteCatalog {
    /// Build a catalog from an arbitrary list of quotes
    pub fn new(quotes: Vec<Quote>) -> Self {
        let tags: BTreeSet<&String> = quotes.iter().flat_map(|q| q.tags.iter()).collect();
        let tags = tags.into_iter().cloned().collect();
        Self { quotes, tags }
    }

    /// Catalog backed by the built-in quote database
    pub fn builtin() -> Self {
        Self::new(builtin_quotes())
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// All distinct tags, sorted lexicographically
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Pick a random quote, optionally restricted to a tag.
    ///
    /// `None` or an empty tag means the whole catalog. Returns `None` when no
    /// quote carries the tag.
    pub fn random_quote(&self, tag: Option<&str>) -> Option<&Quote> {
        self.random_quote_with(&mut rand::thread_rng(), tag)
    }

    /// Same as [`random_quote`](Self::random_quote) with a caller-supplied RNG
    pub fn random_quote_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        tag: Option<&str>,
    ) -> Option<&Quote> {
        let candidates: Vec<&Quote> = match tag.filter(|t| !t.is_empty()) {
            Some(tag) => self.quotes.iter().filter(|q| q.has_tag(tag)).collect(),
            None => self.quotes.iter().collect(),
        };

        candidates.choose(rng).copied()
    }

    /// Case-insensitive substring search over content, author and tags.
    /// Results keep catalog order.
    pub fn search(&self, query: &str) -> Vec<&Quote> {
        let needle = query.to_lowercase();
        self.quotes
            .iter()
            .filter(|q| q.matches_lowercase(&needle))
            .collect()
    }
}

impl Default for QuoteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
