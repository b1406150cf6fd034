//! Error taxonomy shared by the catalog, vote ledger and ranking queries.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::MovieId;
use crate::votes::UserId;

/// Errors for catalog, vote and ranking operations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// No matching row, or an aggregate over an empty set.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The (user, movie) pair already has a live vote.
    #[error("User {user_id} already voted for movie {movie_id}")]
    DuplicateVote { user_id: UserId, movie_id: MovieId },

    /// Any other failure reported by the persistence layer.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Stable classification of a [`CatalogError`], used for presentation codes and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    DuplicateVote,
    StorageFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::DuplicateVote => "duplicate_vote",
            ErrorKind::StorageFailure => "storage_failure",
        }
    }
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::DuplicateVote { .. } => ErrorKind::DuplicateVote,
            CatalogError::Storage(_) => ErrorKind::StorageFailure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }

    pub fn is_duplicate_vote(&self) -> bool {
        matches!(self, CatalogError::DuplicateVote { .. })
    }
}
