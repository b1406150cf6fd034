//! Popularity rankings over the catalog and the vote ledger.
//!
//! Every ranking is computed on demand; nothing is materialized. Ties resolve
//! to whichever row the underlying scan yields first, which depends on the
//! storage engine and is not guaranteed to be stable.

use serde::{Deserialize, Serialize};

use crate::catalog::Movie;
use crate::error::CatalogError;

/// The top movie for some metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRanking {
    pub movie: Movie,
    /// Views or votes, depending on the ranking.
    pub count: u64,
}

/// The top genre for some metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRanking {
    pub genre: String,
    /// Summed views or counted votes, depending on the ranking.
    pub count: u64,
}

/// Which ranking was requested; used for logging and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingKind {
    MostViewedMovie,
    MostViewedGenre,
    MostVotedMovie,
    MostVotedGenre,
}

impl RankingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingKind::MostViewedMovie => "most_viewed_movie",
            RankingKind::MostViewedGenre => "most_viewed_genre",
            RankingKind::MostVotedMovie => "most_voted_movie",
            RankingKind::MostVotedGenre => "most_voted_genre",
        }
    }
}

/// Trait for the four read-only popularity queries.
///
/// Each fails with [`CatalogError::NotFound`] when there is nothing to rank.
/// Vote rankings only consider movies with at least one vote, so they report
/// `NotFound` when the ledger is empty even if the catalog is not.
pub trait RankingAggregator: Send + Sync {
    /// The movie with the most views.
    fn most_viewed_movie(&self) -> Result<MovieRanking, CatalogError>;

    /// The genre whose movies have the most views in total.
    fn most_viewed_genre(&self) -> Result<GenreRanking, CatalogError>;

    /// The movie with the most votes.
    fn most_voted_movie(&self) -> Result<MovieRanking, CatalogError>;

    /// The genre whose movies have received the most votes.
    fn most_voted_genre(&self) -> Result<GenreRanking, CatalogError>;
}
