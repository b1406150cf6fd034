pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pagination;
pub mod ranking;
pub mod search;
pub mod service;
pub mod storage;
pub mod testing;
pub mod votes;

pub use catalog::{watch_location, CatalogStore, Movie, MovieDraft, MovieFields, MovieId};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use error::{CatalogError, ErrorKind};
pub use pagination::{Page, PageRequest, PaginationMetadata};
pub use ranking::{GenreRanking, MovieRanking, RankingAggregator, RankingKind};
pub use search::SearchQuery;
pub use service::MovieCatalogService;
pub use storage::{MovieStore, SqliteMovieStore};
pub use votes::{UserId, Vote, VoteLedger};
