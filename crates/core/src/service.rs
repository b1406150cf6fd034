//! Movie catalog service - the operation surface used by the transport layer.
//!
//! Requests arrive already validated and, where needed, with the authenticated
//! user id attached. Each operation makes a single call into storage and
//! returns either a result or a classified [`CatalogError`]; nothing is retried.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::{CatalogStore, Movie, MovieDraft, MovieId};
use crate::config::Config;
use crate::error::CatalogError;
use crate::metrics::{CATALOG_WRITES, RANKING_QUERIES, VOTES};
use crate::pagination::{Page, PageRequest};
use crate::ranking::{GenreRanking, MovieRanking, RankingAggregator, RankingKind};
use crate::search::SearchQuery;
use crate::storage::MovieStore;
use crate::votes::{UserId, VoteLedger};

/// Orchestrates the catalog store, vote ledger and ranking aggregator.
pub struct MovieCatalogService {
    config: Config,
    catalog: Arc<dyn CatalogStore>,
    votes: Arc<dyn VoteLedger>,
    rankings: Arc<dyn RankingAggregator>,
}

impl MovieCatalogService {
    pub fn new(
        config: Config,
        catalog: Arc<dyn CatalogStore>,
        votes: Arc<dyn VoteLedger>,
        rankings: Arc<dyn RankingAggregator>,
    ) -> Self {
        Self {
            config,
            catalog,
            votes,
            rankings,
        }
    }

    /// Build a service on a single backend providing every storage capability.
    pub fn with_store<S>(config: Config, store: Arc<S>) -> Self
    where
        S: MovieStore + 'static,
    {
        Self::new(config, store.clone(), store.clone(), store)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Add a movie to the catalog with zero views.
    pub fn create_movie(&self, draft: MovieDraft) -> Result<MovieId, CatalogError> {
        let fields = draft.into_fields(&self.config.media.base_url);
        let result = self.catalog.insert(&fields);
        record_write("create", &result);

        match &result {
            Ok(id) => info!(movie_id = %id, title = %fields.title, "Movie created"),
            Err(e) => warn!(title = %fields.title, error = %e, "Failed to create movie"),
        }
        result
    }

    /// Replace every business field of a movie. Views are kept.
    pub fn update_movie(&self, id: MovieId, draft: MovieDraft) -> Result<(), CatalogError> {
        let fields = draft.into_fields(&self.config.media.base_url);
        let result = self.catalog.update(id, &fields);
        record_write("update", &result);

        match &result {
            Ok(()) => info!(movie_id = %id, "Movie updated"),
            Err(e) => warn!(movie_id = %id, error = %e, "Failed to update movie"),
        }
        result
    }

    pub fn get_movie(&self, id: MovieId) -> Result<Movie, CatalogError> {
        debug!(movie_id = %id, "Getting movie");
        let result = self.catalog.get(id);

        if let Err(e) = &result {
            read_failed("get_movie", e);
        }
        result
    }

    /// One page of the catalog in storage order.
    ///
    /// A page past the end is empty but still reports the real totals.
    pub fn list_movies(&self, request: PageRequest) -> Result<Page<Movie>, CatalogError> {
        let request = request.clamped(self.config.pagination.max_page_size);
        debug!(page = request.page, page_size = request.page_size, "Listing movies");

        let result = self.catalog.count().and_then(|total_items| {
            let items = self.catalog.list(request.offset(), request.limit())?;
            Ok(Page::new(items, request, total_items))
        });

        if let Err(e) = &result {
            read_failed("list_movies", e);
        }
        result
    }

    /// Like [`Self::list_movies`], filling unset values from the configured defaults.
    pub fn list_movies_or_default(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Page<Movie>, CatalogError> {
        self.list_movies(PageRequest::from_optional(
            page,
            page_size,
            self.config.pagination.default_page_size,
        ))
    }

    pub fn search_movies(&self, keyword: &str) -> Result<Vec<Movie>, CatalogError> {
        debug!(keyword, "Searching movies");
        let result = self.catalog.search(&SearchQuery::new(keyword));

        if let Err(e) = &result {
            read_failed("search_movies", e);
        }
        result
    }

    /// Record a vote. A second vote for the same pair is [`CatalogError::DuplicateVote`].
    pub fn vote(&self, user_id: UserId, movie_id: MovieId) -> Result<(), CatalogError> {
        let result = self.votes.cast(user_id, movie_id);

        match &result {
            Ok(()) => {
                VOTES.with_label_values(&["accepted"]).inc();
                info!(%user_id, %movie_id, "Vote recorded");
            }
            Err(CatalogError::DuplicateVote { .. }) => {
                VOTES.with_label_values(&["duplicate"]).inc();
                debug!(%user_id, %movie_id, "Duplicate vote rejected");
            }
            Err(e) => {
                VOTES.with_label_values(&["failed"]).inc();
                warn!(%user_id, %movie_id, error = %e, "Failed to record vote");
            }
        }
        result
    }

    /// Withdraw a vote. Succeeds whether or not the vote existed.
    pub fn unvote(&self, user_id: UserId, movie_id: MovieId) -> Result<(), CatalogError> {
        let result = self.votes.withdraw(user_id, movie_id);

        match &result {
            Ok(()) => {
                VOTES.with_label_values(&["withdrawn"]).inc();
                info!(%user_id, %movie_id, "Vote withdrawn");
            }
            Err(e) => {
                VOTES.with_label_values(&["failed"]).inc();
                warn!(%user_id, %movie_id, error = %e, "Failed to withdraw vote");
            }
        }
        result
    }

    pub fn voted_movies(&self, user_id: UserId) -> Result<Vec<Movie>, CatalogError> {
        debug!(%user_id, "Listing voted movies");
        let result = self.votes.voted_movies(user_id);

        if let Err(e) = &result {
            read_failed("voted_movies", e);
        }
        result
    }

    pub fn most_viewed_movie(&self) -> Result<MovieRanking, CatalogError> {
        ranked(RankingKind::MostViewedMovie, self.rankings.most_viewed_movie())
    }

    pub fn most_viewed_genre(&self) -> Result<GenreRanking, CatalogError> {
        ranked(RankingKind::MostViewedGenre, self.rankings.most_viewed_genre())
    }

    pub fn most_voted_movie(&self) -> Result<MovieRanking, CatalogError> {
        ranked(RankingKind::MostVotedMovie, self.rankings.most_voted_movie())
    }

    pub fn most_voted_genre(&self) -> Result<GenreRanking, CatalogError> {
        ranked(RankingKind::MostVotedGenre, self.rankings.most_voted_genre())
    }
}

fn record_write<T>(operation: &str, result: &Result<T, CatalogError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.kind().as_str(),
    };
    CATALOG_WRITES
        .with_label_values(&[operation, outcome])
        .inc();
}

/// Misses are expected on reads; anything else is worth a warning.
fn read_failed(operation: &str, error: &CatalogError) {
    match error {
        CatalogError::NotFound(_) => debug!(operation, error = %error, "Read found nothing"),
        _ => warn!(operation, error = %error, kind = error.kind().as_str(), "Read failed"),
    }
}

fn ranked<T>(kind: RankingKind, result: Result<T, CatalogError>) -> Result<T, CatalogError> {
    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.kind().as_str(),
    };
    RANKING_QUERIES
        .with_label_values(&[kind.as_str(), outcome])
        .inc();

    match &result {
        Ok(_) | Err(CatalogError::NotFound(_)) => {
            debug!(ranking = kind.as_str(), outcome, "Ranking computed")
        }
        Err(e) => warn!(ranking = kind.as_str(), error = %e, "Ranking query failed"),
    }
    result
}
