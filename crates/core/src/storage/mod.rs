//! Persistence backends for the catalog, vote ledger and rankings.

mod sqlite;

pub use sqlite::SqliteMovieStore;

use crate::catalog::CatalogStore;
use crate::ranking::RankingAggregator;
use crate::votes::VoteLedger;

/// A backend that provides all three storage capabilities over shared state.
///
/// Rankings join movies to votes, so a single backend usually owns both.
pub trait MovieStore: CatalogStore + VoteLedger + RankingAggregator {}

impl<T> MovieStore for T where T: CatalogStore + VoteLedger + RankingAggregator {}
