//! In-memory movie store for testing.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::catalog::{CatalogStore, Movie, MovieFields, MovieId};
use crate::error::CatalogError;
use crate::ranking::{GenreRanking, MovieRanking, RankingAggregator};
use crate::search::SearchQuery;
use crate::votes::{UserId, Vote, VoteLedger};

#[derive(Debug, Default)]
struct State {
    /// Insertion order is the storage order.
    movies: Vec<Movie>,
    votes: Vec<Vote>,
    last_id: i64,
    /// If set, the next operation fails with this error.
    next_error: Option<CatalogError>,
}

impl State {
    fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }
}

/// In-memory implementation of every storage trait.
///
/// Behaves like the SQLite store: votes for unknown movies are rejected the
/// way a foreign key would reject them, and the duplicate check and the
/// insert happen under one lock.
///
/// Ties in rankings resolve to the first movie or genre in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    state: Mutex<State>,
}

impl InMemoryMovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the next operation to fail with the given error.
    pub fn set_next_error(&self, error: CatalogError) {
        if let Ok(mut state) = self.state.lock() {
            state.next_error = Some(error);
        }
    }

    /// Overwrite the views of a movie. Returns false if the movie does not exist.
    pub fn set_views(&self, id: MovieId, views: u64) -> bool {
        let Ok(mut state) = self.state.lock() else {
            return false;
        };
        match state.movies.iter_mut().find(|m| m.id == id) {
            Some(movie) => {
                movie.views = views;
                true
            }
            None => false,
        }
    }

    /// Number of live votes.
    pub fn vote_count(&self) -> usize {
        self.state.lock().map(|s| s.votes.len()).unwrap_or(0)
    }

    /// Lock the state, failing first with any injected error.
    fn state(&self) -> Result<MutexGuard<'_, State>, CatalogError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| CatalogError::Storage("state lock poisoned".to_string()))?;

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }
        Ok(state)
    }
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Keep the first entry with the highest count.
fn first_max<T>(entries: impl IntoIterator<Item = (T, u64)>) -> Option<(T, u64)> {
    let mut best: Option<(T, u64)> = None;
    for (item, count) in entries {
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((item, count));
        }
    }
    best
}

/// Sum counts per genre, keeping genres in first-seen order.
fn per_genre<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> Vec<(String, u64)> {
    let mut totals: Vec<(String, u64)> = Vec::new();
    for (genre, count) in entries {
        match totals.iter_mut().find(|(g, _)| g == genre) {
            Some((_, total)) => *total += count,
            None => totals.push((genre.to_string(), count)),
        }
    }
    totals
}

impl CatalogStore for InMemoryMovieStore {
    fn insert(&self, fields: &MovieFields) -> Result<MovieId, CatalogError> {
        let mut state = self.state()?;
        state.last_id += 1;
        let id = MovieId(state.last_id);

        state.movies.push(Movie {
            id,
            title: fields.title.clone(),
            description: fields.description.clone(),
            duration: fields.duration,
            artist: fields.artist.clone(),
            genre: fields.genre.clone(),
            watch_url: fields.watch_url.clone(),
            views: 0,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    fn update(&self, id: MovieId, fields: &MovieFields) -> Result<(), CatalogError> {
        let mut state = self.state()?;
        let movie = state
            .movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| CatalogError::NotFound(format!("movie {}", id)))?;

        movie.title = fields.title.clone();
        movie.description = fields.description.clone();
        movie.duration = fields.duration;
        movie.artist = fields.artist.clone();
        movie.genre = fields.genre.clone();
        movie.watch_url = fields.watch_url.clone();
        Ok(())
    }

    fn get(&self, id: MovieId) -> Result<Movie, CatalogError> {
        let state = self.state()?;
        state
            .movie(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("movie {}", id)))
    }

    fn list(&self, offset: u64, limit: u64) -> Result<Vec<Movie>, CatalogError> {
        let state = self.state()?;
        Ok(state
            .movies
            .iter()
            .skip(to_index(offset))
            .take(to_index(limit))
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<u64, CatalogError> {
        let state = self.state()?;
        Ok(state.movies.len() as u64)
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<Movie>, CatalogError> {
        let state = self.state()?;
        Ok(state
            .movies
            .iter()
            .filter(|m| query.matches(m))
            .cloned()
            .collect())
    }

    fn record_view(&self, id: MovieId) -> Result<(), CatalogError> {
        let mut state = self.state()?;
        let movie = state
            .movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| CatalogError::NotFound(format!("movie {}", id)))?;
        movie.views += 1;
        Ok(())
    }
}

impl VoteLedger for InMemoryMovieStore {
    fn cast(&self, user_id: UserId, movie_id: MovieId) -> Result<(), CatalogError> {
        let mut state = self.state()?;

        if state.movie(movie_id).is_none() {
            return Err(CatalogError::Storage(format!(
                "movie {} does not exist",
                movie_id
            )));
        }
        if state
            .votes
            .iter()
            .any(|v| v.user_id == user_id && v.movie_id == movie_id)
        {
            return Err(CatalogError::DuplicateVote { user_id, movie_id });
        }

        state.votes.push(Vote {
            user_id,
            movie_id,
            created_at: Utc::now(),
        });
        Ok(())
    }

    fn withdraw(&self, user_id: UserId, movie_id: MovieId) -> Result<(), CatalogError> {
        let mut state = self.state()?;
        state
            .votes
            .retain(|v| !(v.user_id == user_id && v.movie_id == movie_id));
        Ok(())
    }

    fn voted_movies(&self, user_id: UserId) -> Result<Vec<Movie>, CatalogError> {
        let state = self.state()?;
        Ok(state
            .votes
            .iter()
            .filter(|v| v.user_id == user_id)
            .filter_map(|v| state.movie(v.movie_id).cloned())
            .collect())
    }

    fn purge_user(&self, user_id: UserId) -> Result<u64, CatalogError> {
        let mut state = self.state()?;
        let before = state.votes.len();
        state.votes.retain(|v| v.user_id != user_id);
        Ok((before - state.votes.len()) as u64)
    }
}

impl RankingAggregator for InMemoryMovieStore {
    fn most_viewed_movie(&self) -> Result<MovieRanking, CatalogError> {
        let state = self.state()?;
        first_max(state.movies.iter().map(|m| (m, m.views)))
            .map(|(movie, count)| MovieRanking {
                movie: movie.clone(),
                count,
            })
            .ok_or_else(|| CatalogError::NotFound("no movies in catalog".to_string()))
    }

    fn most_viewed_genre(&self) -> Result<GenreRanking, CatalogError> {
        let state = self.state()?;
        let totals = per_genre(state.movies.iter().map(|m| (m.genre.as_str(), m.views)));
        first_max(totals)
            .map(|(genre, count)| GenreRanking { genre, count })
            .ok_or_else(|| CatalogError::NotFound("no movies in catalog".to_string()))
    }

    fn most_voted_movie(&self) -> Result<MovieRanking, CatalogError> {
        let state = self.state()?;
        let tallies = state.movies.iter().filter_map(|m| {
            let votes = state.votes.iter().filter(|v| v.movie_id == m.id).count() as u64;
            (votes > 0).then_some((m, votes))
        });
        first_max(tallies)
            .map(|(movie, count)| MovieRanking {
                movie: movie.clone(),
                count,
            })
            .ok_or_else(|| CatalogError::NotFound("no votes recorded".to_string()))
    }

    fn most_voted_genre(&self) -> Result<GenreRanking, CatalogError> {
        let state = self.state()?;
        let totals = per_genre(
            state
                .votes
                .iter()
                .filter_map(|v| state.movie(v.movie_id))
                .map(|m| (m.genre.as_str(), 1)),
        );
        first_max(totals)
            .map(|(genre, count)| GenreRanking { genre, count })
            .ok_or_else(|| CatalogError::NotFound("no votes recorded".to_string()))
    }
}
