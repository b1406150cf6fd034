//! Movie catalog - durable storage of movie records.
//!
//! Movies are created and replaced by admins, listed page by page and searched
//! by keyword. Views are only ever incremented by whoever serves the media.

mod types;

pub use types::*;

use crate::error::CatalogError;
use crate::search::SearchQuery;

/// Trait for movie catalog storage.
pub trait CatalogStore: Send + Sync {
    /// Insert a new movie with zero views, returning its id.
    fn insert(&self, fields: &MovieFields) -> Result<MovieId, CatalogError>;

    /// Replace the business fields and watch location of an existing movie.
    ///
    /// Views and creation time are left untouched.
    fn update(&self, id: MovieId, fields: &MovieFields) -> Result<(), CatalogError>;

    /// Get a movie by id.
    fn get(&self, id: MovieId) -> Result<Movie, CatalogError>;

    /// List movies in storage order, skipping `offset` and returning at most `limit`.
    fn list(&self, offset: u64, limit: u64) -> Result<Vec<Movie>, CatalogError>;

    /// Count all movies.
    fn count(&self) -> Result<u64, CatalogError>;

    /// Find movies where the keyword occurs in title, description, artist or genre.
    fn search(&self, query: &SearchQuery) -> Result<Vec<Movie>, CatalogError>;

    /// Increment the views of a movie by one.
    ///
    /// Called by the collaborator that serves media, never by catalog operations.
    fn record_view(&self, id: MovieId) -> Result<(), CatalogError>;
}
