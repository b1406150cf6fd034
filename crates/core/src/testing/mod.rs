//! Testing utilities: an in-memory store and fixtures.
//!
//! The in-memory store implements every storage trait, so a
//! [`crate::MovieCatalogService`] can run without SQLite.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use marquee_core::testing::{fixtures, InMemoryMovieStore};
//! use marquee_core::{Config, MovieCatalogService};
//!
//! let store = Arc::new(InMemoryMovieStore::new());
//! let service = MovieCatalogService::with_store(Config::default(), store.clone());
//!
//! let id = service.create_movie(fixtures::draft("Heat", "Crime"))?;
//! store.set_views(id, 10);
//! ```

mod memory_store;

pub use memory_store::InMemoryMovieStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::MovieDraft;

    /// Create a movie draft with reasonable defaults.
    ///
    /// The file name is the lowercased title with an `.mp4` extension.
    pub fn draft(title: &str, genre: &str) -> MovieDraft {
        MovieDraft::new(
            title,
            format!("A film called {}.", title),
            110,
            "Test Director",
            genre,
            format!("{}.mp4", title.to_lowercase()),
        )
    }

    /// Create a draft with explicit artist and description, for search tests.
    pub fn described_draft(
        title: &str,
        description: &str,
        artist: &str,
        genre: &str,
    ) -> MovieDraft {
        let mut draft = draft(title, genre);
        draft.description = description.to_string();
        draft.artist = artist.to_string();
        draft
    }

    /// Create `count` drafts titled "Movie 1", "Movie 2", ... in one genre.
    pub fn numbered_drafts(count: usize, genre: &str) -> Vec<MovieDraft> {
        (1..=count)
            .map(|i| draft(&format!("Movie {}", i), genre))
            .collect()
    }
}
