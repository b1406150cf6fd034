//! Vote ledger - at most one live vote per user per movie.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Movie, MovieId};
use crate::error::CatalogError;

/// Identifier of an authenticated user, supplied by the upstream identity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub created_at: DateTime<Utc>,
}

/// Trait for vote storage.
///
/// Implementations must make the uniqueness check and the insert one atomic
/// step, either through a storage constraint or an insert-if-absent under a lock.
pub trait VoteLedger: Send + Sync {
    /// Record a vote. Fails with [`CatalogError::DuplicateVote`] if the pair already exists.
    ///
    /// The movie's existence is not checked here; referential integrity is left to the store.
    fn cast(&self, user_id: UserId, movie_id: MovieId) -> Result<(), CatalogError>;

    /// Remove a vote if present.
    ///
    /// Removing a vote that does not exist is not an error.
    fn withdraw(&self, user_id: UserId, movie_id: MovieId) -> Result<(), CatalogError>;

    /// Movies the user has voted for, in storage order.
    fn voted_movies(&self, user_id: UserId) -> Result<Vec<Movie>, CatalogError>;

    /// Remove every vote of a user, returning how many were removed.
    ///
    /// This is the cascade for a user deleted from the identity system.
    fn purge_user(&self, user_id: UserId) -> Result<u64, CatalogError>;
}
