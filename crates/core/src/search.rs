//! Keyword search over the catalog.
//!
//! A keyword matches a movie when it occurs as a case-insensitive substring of
//! the title, description, artist or genre. Any single field is enough. The
//! keyword is one literal string: no tokenizing, no wildcards, no ranking.

use serde::{Deserialize, Serialize};

use crate::catalog::Movie;

/// Character used to escape `LIKE` wildcards in the bound pattern.
pub const LIKE_ESCAPE: char = '\\';

/// Query for searching the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Keyword; empty matches every movie.
    #[serde(default)]
    pub keyword: String,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// Build the `LIKE` pattern for this keyword, to be used with `ESCAPE '\'`.
    ///
    /// `%` and `_` in the keyword are matched literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.keyword.len() + 2);
        pattern.push('%');
        for c in self.keyword.chars() {
            if c == '%' || c == '_' || c == LIKE_ESCAPE {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// Check a movie against this query without going through SQL.
    ///
    /// Case folding is ASCII-only so results agree with SQLite's `LIKE`.
    pub fn matches(&self, movie: &Movie) -> bool {
        let needle = self.keyword.to_ascii_lowercase();
        [&movie.title, &movie.description, &movie.artist, &movie.genre]
            .iter()
            .any(|field| field.to_ascii_lowercase().contains(&needle))
    }
}
