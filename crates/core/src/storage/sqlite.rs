//! SQLite-backed movie store: catalog, vote ledger and rankings on one connection.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode};
use tracing::{debug, warn};

use crate::catalog::{CatalogStore, Movie, MovieFields, MovieId};
use crate::config::DatabaseConfig;
use crate::error::CatalogError;
use crate::ranking::{GenreRanking, MovieRanking, RankingAggregator};
use crate::search::SearchQuery;
use crate::votes::{UserId, VoteLedger};

const MOVIE_COLUMNS: &str =
    "m.id, m.title, m.description, m.duration, m.artists, m.genres, m.watch_url, m.views_count, m.created_at";

/// SQLite-backed movie store.
pub struct SqliteMovieStore {
    conn: Mutex<Connection>,
}

impl SqliteMovieStore {
    /// Create a new SQLite store, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path).map_err(db_err)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open the database file named by the `[database]` section.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, CatalogError> {
        debug!(path = %config.path.display(), "Opening movie database");
        Self::new(&config.path)
    }

    /// Create an in-memory SQLite store (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                duration INTEGER NOT NULL,
                artists TEXT NOT NULL,
                genres TEXT NOT NULL,
                watch_url TEXT NOT NULL,
                views_count INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_movies_genres ON movies(genres);

            -- One live vote per (user, movie); users live in the identity system
            CREATE TABLE IF NOT EXISTS votes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
                created_at TEXT NOT NULL,
                UNIQUE(user_id, movie_id)
            );

            CREATE INDEX IF NOT EXISTS idx_votes_movie_id ON votes(movie_id);
            "#,
        )
        .map_err(db_err)?;

        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, CatalogError> {
        self.conn
            .lock()
            .map_err(|_| CatalogError::Storage("connection lock poisoned".to_string()))
    }

    fn row_to_movie(row: &rusqlite::Row) -> rusqlite::Result<Movie> {
        let created_at_str: String = row.get(8)?;
        let created_at = match DateTime::parse_from_rfc3339(&created_at_str) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(e) => {
                let id: i64 = row.get(0)?;
                warn!(
                    movie_id = id,
                    created_at = %created_at_str,
                    error = %e,
                    "Unparseable movie timestamp, using current time"
                );
                Utc::now()
            }
        };

        Ok(Movie {
            id: MovieId(row.get(0)?),
            title: row.get(1)?,
            description: row.get(2)?,
            duration: row.get(3)?,
            artist: row.get(4)?,
            genre: row.get(5)?,
            watch_url: row.get(6)?,
            views: row.get(7)?,
            created_at,
        })
    }

    fn query_movies(
        conn: &Connection,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Movie>, CatalogError> {
        let mut stmt = conn.prepare(sql).map_err(db_err)?;
        let rows = stmt
            .query_map(params, Self::row_to_movie)
            .map_err(db_err)?;

        let mut movies = Vec::new();
        for row in rows {
            movies.push(row.map_err(db_err)?);
        }
        Ok(movies)
    }
}

fn db_err(e: rusqlite::Error) -> CatalogError {
    CatalogError::Storage(e.to_string())
}

/// Map a failed ranking query: no rows means there was nothing to rank.
fn ranking_err(e: rusqlite::Error, what: &str) -> CatalogError {
    match e {
        rusqlite::Error::QueryReturnedNoRows => CatalogError::NotFound(what.to_string()),
        _ => db_err(e),
    }
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    match e {
        rusqlite::Error::SqliteFailure(err, _) => {
            err.code == ErrorCode::ConstraintViolation
                && (err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    || err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
        }
        _ => false,
    }
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl CatalogStore for SqliteMovieStore {
    fn insert(&self, fields: &MovieFields) -> Result<MovieId, CatalogError> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO movies (title, description, duration, artists, genres, watch_url, views_count, created_at)
             VALUES (?, ?, ?, ?, ?, ?, 0, ?)",
            params![
                &fields.title,
                &fields.description,
                fields.duration,
                &fields.artist,
                &fields.genre,
                &fields.watch_url,
                Utc::now().to_rfc3339(),
            ],
        )
        .map_err(db_err)?;

        Ok(MovieId(conn.last_insert_rowid()))
    }

    fn update(&self, id: MovieId, fields: &MovieFields) -> Result<(), CatalogError> {
        let conn = self.conn()?;

        let rows_affected = conn
            .execute(
                "UPDATE movies SET title = ?, description = ?, duration = ?, artists = ?, genres = ?, watch_url = ?
                 WHERE id = ?",
                params![
                    &fields.title,
                    &fields.description,
                    fields.duration,
                    &fields.artist,
                    &fields.genre,
                    &fields.watch_url,
                    id.0,
                ],
            )
            .map_err(db_err)?;

        if rows_affected == 0 {
            return Err(CatalogError::NotFound(format!("movie {}", id)));
        }

        Ok(())
    }

    fn get(&self, id: MovieId) -> Result<Movie, CatalogError> {
        let conn = self.conn()?;

        conn.query_row(
            &format!("SELECT {} FROM movies m WHERE m.id = ?", MOVIE_COLUMNS),
            params![id.0],
            Self::row_to_movie,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => CatalogError::NotFound(format!("movie {}", id)),
            _ => db_err(e),
        })
    }

    fn list(&self, offset: u64, limit: u64) -> Result<Vec<Movie>, CatalogError> {
        let conn = self.conn()?;

        Self::query_movies(
            &conn,
            &format!(
                "SELECT {} FROM movies m ORDER BY m.id LIMIT ? OFFSET ?",
                MOVIE_COLUMNS
            ),
            params![to_sql_int(limit), to_sql_int(offset)],
        )
    }

    fn count(&self) -> Result<u64, CatalogError> {
        let conn = self.conn()?;

        conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
            .map_err(db_err)
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<Movie>, CatalogError> {
        let conn = self.conn()?;
        let pattern = query.like_pattern();

        Self::query_movies(
            &conn,
            &format!(
                "SELECT {} FROM movies m
                 WHERE m.title LIKE ?1 ESCAPE '\\'
                    OR m.description LIKE ?1 ESCAPE '\\'
                    OR m.artists LIKE ?1 ESCAPE '\\'
                    OR m.genres LIKE ?1 ESCAPE '\\'
                 ORDER BY m.id",
                MOVIE_COLUMNS
            ),
            params![&pattern],
        )
    }

    fn record_view(&self, id: MovieId) -> Result<(), CatalogError> {
        let conn = self.conn()?;

        let rows_affected = conn
            .execute(
                "UPDATE movies SET views_count = views_count + 1 WHERE id = ?",
                params![id.0],
            )
            .map_err(db_err)?;

        if rows_affected == 0 {
            return Err(CatalogError::NotFound(format!("movie {}", id)));
        }

        Ok(())
    }
}

impl VoteLedger for SqliteMovieStore {
    fn cast(&self, user_id: UserId, movie_id: MovieId) -> Result<(), CatalogError> {
        let conn = self.conn()?;

        // The UNIQUE(user_id, movie_id) constraint is the only duplicate check
        conn.execute(
            "INSERT INTO votes (user_id, movie_id, created_at) VALUES (?, ?, ?)",
            params![user_id.0, movie_id.0, Utc::now().to_rfc3339()],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                CatalogError::DuplicateVote { user_id, movie_id }
            } else {
                db_err(e)
            }
        })?;

        Ok(())
    }

    fn withdraw(&self, user_id: UserId, movie_id: MovieId) -> Result<(), CatalogError> {
        let conn = self.conn()?;

        let rows_affected = conn
            .execute(
                "DELETE FROM votes WHERE user_id = ? AND movie_id = ?",
                params![user_id.0, movie_id.0],
            )
            .map_err(db_err)?;

        debug!(%user_id, %movie_id, rows_affected, "Vote withdrawn");
        Ok(())
    }

    fn voted_movies(&self, user_id: UserId) -> Result<Vec<Movie>, CatalogError> {
        let conn = self.conn()?;

        Self::query_movies(
            &conn,
            &format!(
                "SELECT {} FROM movies m
                 JOIN votes v ON m.id = v.movie_id
                 WHERE v.user_id = ?
                 ORDER BY v.id",
                MOVIE_COLUMNS
            ),
            params![user_id.0],
        )
    }

    fn purge_user(&self, user_id: UserId) -> Result<u64, CatalogError> {
        let conn = self.conn()?;

        let rows_affected = conn
            .execute("DELETE FROM votes WHERE user_id = ?", params![user_id.0])
            .map_err(db_err)?;

        Ok(rows_affected as u64)
    }
}

impl RankingAggregator for SqliteMovieStore {
    fn most_viewed_movie(&self) -> Result<MovieRanking, CatalogError> {
        let conn = self.conn()?;

        let movie = conn
            .query_row(
                &format!(
                    "SELECT {} FROM movies m ORDER BY m.views_count DESC LIMIT 1",
                    MOVIE_COLUMNS
                ),
                [],
                Self::row_to_movie,
            )
            .map_err(|e| ranking_err(e, "no movies in catalog"))?;

        Ok(MovieRanking {
            count: movie.views,
            movie,
        })
    }

    fn most_viewed_genre(&self) -> Result<GenreRanking, CatalogError> {
        let conn = self.conn()?;

        conn.query_row(
            "SELECT genres, SUM(views_count) AS total_views
             FROM movies
             GROUP BY genres
             ORDER BY total_views DESC
             LIMIT 1",
            [],
            |row| {
                Ok(GenreRanking {
                    genre: row.get(0)?,
                    count: row.get(1)?,
                })
            },
        )
        .map_err(|e| ranking_err(e, "no movies in catalog"))
    }

    fn most_voted_movie(&self) -> Result<MovieRanking, CatalogError> {
        let conn = self.conn()?;

        // Inner join: movies without votes never qualify
        conn.query_row(
            &format!(
                "SELECT {}, COUNT(v.movie_id) AS vote_count
                 FROM movies m
                 JOIN votes v ON m.id = v.movie_id
                 GROUP BY m.id
                 ORDER BY vote_count DESC
                 LIMIT 1",
                MOVIE_COLUMNS
            ),
            [],
            |row| {
                Ok(MovieRanking {
                    movie: Self::row_to_movie(row)?,
                    count: row.get(9)?,
                })
            },
        )
        .map_err(|e| ranking_err(e, "no votes recorded"))
    }

    fn most_voted_genre(&self) -> Result<GenreRanking, CatalogError> {
        let conn = self.conn()?;

        conn.query_row(
            "SELECT m.genres, COUNT(v.movie_id) AS vote_count
             FROM movies m
             JOIN votes v ON m.id = v.movie_id
             GROUP BY m.genres
             ORDER BY vote_count DESC
             LIMIT 1",
            [],
            |row| {
                Ok(GenreRanking {
                    genre: row.get(0)?,
                    count: row.get(1)?,
                })
            },
        )
        .map_err(|e| ranking_err(e, "no votes recorded"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> SqliteMovieStore {
        SqliteMovieStore::in_memory().unwrap()
    }

    fn fields(title: &str, genre: &str) -> MovieFields {
        MovieFields {
            title: title.to_string(),
            description: format!("About {}", title),
            duration: 100,
            artist: "Someone".to_string(),
            genre: genre.to_string(),
            watch_url: format!("localhost:8080/movies/{}.mp4", title.to_lowercase()),
        }
    }

    fn set_views(store: &SqliteMovieStore, id: MovieId, views: u64) {
        let conn = store.conn.lock().unwrap();
        conn.execute(
            "UPDATE movies SET views_count = ? WHERE id = ?",
            params![views as i64, id.0],
        )
        .unwrap();
    }

    #[test]
    fn test_insert_and_get() {
        let store = create_test_store();
        let id = store.insert(&fields("Alien", "Horror")).unwrap();

        let movie = store.get(id).unwrap();
        assert_eq!(movie.id, id);
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.genre, "Horror");
        assert_eq!(movie.views, 0);
        assert_eq!(movie.watch_url, "localhost:8080/movies/alien.mp4");
    }

    #[test]
    fn test_unparseable_created_at_still_loads() {
        let store = create_test_store();
        let id = store.insert(&fields("Heat", "Crime")).unwrap();
        {
            let conn = store.conn.lock().unwrap();
            conn.execute(
                "UPDATE movies SET created_at = 'yesterday' WHERE id = ?",
                params![id.0],
            )
            .unwrap();
        }

        let before = Utc::now();
        let movie = store.get(id).unwrap();
        assert_eq!(movie.title, "Heat");
        assert!(movie.created_at >= before);
    }

    #[test]
    fn test_from_config_opens_configured_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = DatabaseConfig {
            path: temp_dir.path().join("configured.db"),
        };

        let store = SqliteMovieStore::from_config(&config).unwrap();
        let id = store.insert(&fields("Heat", "Crime")).unwrap();
        drop(store);

        assert!(config.path.exists());
        let reopened = SqliteMovieStore::from_config(&config).unwrap();
        assert_eq!(reopened.get(id).unwrap().title, "Heat");
    }

    #[test]
    fn test_get_nonexistent() {
        let store = create_test_store();
        let result = store.get(MovieId(99));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_update_replaces_fields_keeps_views() {
        let store = create_test_store();
        let id = store.insert(&fields("Alien", "Horror")).unwrap();
        set_views(&store, id, 5);

        let mut replacement = fields("Aliens", "Action");
        replacement.duration = 137;
        store.update(id, &replacement).unwrap();

        let movie = store.get(id).unwrap();
        assert_eq!(movie.title, "Aliens");
        assert_eq!(movie.genre, "Action");
        assert_eq!(movie.duration, 137);
        assert_eq!(movie.watch_url, "localhost:8080/movies/aliens.mp4");
        assert_eq!(movie.views, 5);
    }

    #[test]
    fn test_update_nonexistent() {
        let store = create_test_store();
        let result = store.update(MovieId(42), &fields("Ghost", "Drama"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_same_file_name_is_not_a_conflict() {
        let store = create_test_store();
        let mut a = fields("A", "Drama");
        let mut b = fields("B", "Drama");
        a.watch_url = "localhost:8080/movies/same.mp4".to_string();
        b.watch_url = a.watch_url.clone();

        let id_a = store.insert(&a).unwrap();
        let id_b = store.insert(&b).unwrap();
        assert_ne!(id_a, id_b);
        assert_eq!(store.get(id_a).unwrap().watch_url, store.get(id_b).unwrap().watch_url);
    }

    #[test]
    fn test_list_and_count() {
        let store = create_test_store();
        for i in 0..25 {
            store.insert(&fields(&format!("Movie {}", i), "Drama")).unwrap();
        }

        assert_eq!(store.count().unwrap(), 25);

        let first = store.list(0, 10).unwrap();
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].title, "Movie 0");

        let last = store.list(20, 10).unwrap();
        assert_eq!(last.len(), 5);
        assert_eq!(last[4].title, "Movie 24");

        assert!(store.list(30, 10).unwrap().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let store = create_test_store();
        store.insert(&fields("Inception", "Sci-Fi")).unwrap();
        store.insert(&fields("Amelie", "Romance")).unwrap();

        let results = store.search(&SearchQuery::new("sci")).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Inception");

        assert_eq!(store.search(&SearchQuery::new("incep")).unwrap().len(), 1);
        assert!(store.search(&SearchQuery::new("xyz")).unwrap().is_empty());
        assert_eq!(store.search(&SearchQuery::new("")).unwrap().len(), 2);
    }

    #[test]
    fn test_search_treats_wildcards_literally() {
        let store = create_test_store();
        store.insert(&fields("100% Wolf", "Animation")).unwrap();
        store.insert(&fields("Heat", "Crime")).unwrap();

        let results = store.search(&SearchQuery::new("0%")).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "100% Wolf");

        assert!(store.search(&SearchQuery::new("H_at")).unwrap().is_empty());
    }

    #[test]
    fn test_record_view() {
        let store = create_test_store();
        let id = store.insert(&fields("Alien", "Horror")).unwrap();

        store.record_view(id).unwrap();
        store.record_view(id).unwrap();
        assert_eq!(store.get(id).unwrap().views, 2);

        assert!(matches!(
            store.record_view(MovieId(999)),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_cast_twice_is_duplicate() {
        let store = create_test_store();
        let movie = store.insert(&fields("Alien", "Horror")).unwrap();

        store.cast(UserId(1), movie).unwrap();
        let result = store.cast(UserId(1), movie);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateVote { user_id: UserId(1), movie_id }) if movie_id == movie
        ));

        // Another user can still vote
        store.cast(UserId(2), movie).unwrap();
    }

    #[test]
    fn test_cast_for_unknown_movie_is_storage_error() {
        let store = create_test_store();
        let result = store.cast(UserId(1), MovieId(404));
        assert!(matches!(result, Err(CatalogError::Storage(_))));
    }

    #[test]
    fn test_withdraw_missing_vote_succeeds() {
        let store = create_test_store();
        store.withdraw(UserId(1), MovieId(1)).unwrap();
    }

    #[test]
    fn test_withdraw_allows_voting_again() {
        let store = create_test_store();
        let movie = store.insert(&fields("Alien", "Horror")).unwrap();

        store.cast(UserId(1), movie).unwrap();
        store.withdraw(UserId(1), movie).unwrap();
        store.cast(UserId(1), movie).unwrap();
        assert_eq!(store.voted_movies(UserId(1)).unwrap().len(), 1);
    }

    #[test]
    fn test_voted_movies() {
        let store = create_test_store();
        let a = store.insert(&fields("A", "Drama")).unwrap();
        let b = store.insert(&fields("B", "Comedy")).unwrap();
        store.insert(&fields("C", "Drama")).unwrap();

        store.cast(UserId(1), b).unwrap();
        store.cast(UserId(1), a).unwrap();
        store.cast(UserId(2), a).unwrap();

        let titles: Vec<String> = store
            .voted_movies(UserId(1))
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["B", "A"]);

        assert!(store.voted_movies(UserId(3)).unwrap().is_empty());
    }

    #[test]
    fn test_purge_user() {
        let store = create_test_store();
        let a = store.insert(&fields("A", "Drama")).unwrap();
        let b = store.insert(&fields("B", "Drama")).unwrap();
        store.cast(UserId(1), a).unwrap();
        store.cast(UserId(1), b).unwrap();
        store.cast(UserId(2), a).unwrap();

        assert_eq!(store.purge_user(UserId(1)).unwrap(), 2);
        assert!(store.voted_movies(UserId(1)).unwrap().is_empty());
        assert_eq!(store.voted_movies(UserId(2)).unwrap().len(), 1);
        assert_eq!(store.purge_user(UserId(1)).unwrap(), 0);
    }

    #[test]
    fn test_deleting_movie_cascades_to_votes() {
        let store = create_test_store();
        let a = store.insert(&fields("A", "Drama")).unwrap();
        store.cast(UserId(1), a).unwrap();

        {
            let conn = store.conn.lock().unwrap();
            conn.execute("DELETE FROM movies WHERE id = ?", params![a.0])
                .unwrap();
            let remaining: i64 = conn
                .query_row("SELECT COUNT(*) FROM votes", [], |row| row.get(0))
                .unwrap();
            assert_eq!(remaining, 0);
        }
    }

    #[test]
    fn test_rankings_on_empty_catalog() {
        let store = create_test_store();
        assert!(matches!(store.most_viewed_movie(), Err(CatalogError::NotFound(_))));
        assert!(matches!(store.most_viewed_genre(), Err(CatalogError::NotFound(_))));
        assert!(matches!(store.most_voted_movie(), Err(CatalogError::NotFound(_))));
        assert!(matches!(store.most_voted_genre(), Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_most_viewed_movie() {
        let store = create_test_store();
        let a = store.insert(&fields("A", "Drama")).unwrap();
        let b = store.insert(&fields("B", "Comedy")).unwrap();
        set_views(&store, a, 3);
        set_views(&store, b, 10);

        let ranking = store.most_viewed_movie().unwrap();
        assert_eq!(ranking.movie.id, b);
        assert_eq!(ranking.count, 10);
    }

    #[test]
    fn test_most_viewed_genre_sums_views() {
        let store = create_test_store();
        let a = store.insert(&fields("A", "Drama")).unwrap();
        let b = store.insert(&fields("B", "Drama")).unwrap();
        let c = store.insert(&fields("C", "Comedy")).unwrap();
        set_views(&store, a, 4);
        set_views(&store, b, 4);
        set_views(&store, c, 7);

        let ranking = store.most_viewed_genre().unwrap();
        assert_eq!(ranking.genre, "Drama");
        assert_eq!(ranking.count, 8);
    }

    #[test]
    fn test_most_voted_excludes_unvoted_movies() {
        let store = create_test_store();
        store.insert(&fields("A", "Drama")).unwrap();
        let b = store.insert(&fields("B", "Comedy")).unwrap();

        // Movies exist but nobody voted
        assert!(matches!(store.most_voted_movie(), Err(CatalogError::NotFound(_))));
        assert!(matches!(store.most_voted_genre(), Err(CatalogError::NotFound(_))));

        store.cast(UserId(1), b).unwrap();

        let ranking = store.most_voted_movie().unwrap();
        assert_eq!(ranking.movie.id, b);
        assert_eq!(ranking.count, 1);

        let genre = store.most_voted_genre().unwrap();
        assert_eq!(genre.genre, "Comedy");
        assert_eq!(genre.count, 1);
    }

    #[test]
    fn test_most_voted_genre_counts_across_movies() {
        let store = create_test_store();
        let a = store.insert(&fields("A", "Drama")).unwrap();
        let b = store.insert(&fields("B", "Drama")).unwrap();
        let c = store.insert(&fields("C", "Comedy")).unwrap();

        store.cast(UserId(1), a).unwrap();
        store.cast(UserId(2), b).unwrap();
        store.cast(UserId(1), c).unwrap();
        store.cast(UserId(2), c).unwrap();
        store.cast(UserId(3), c).unwrap();

        let movie = store.most_voted_movie().unwrap();
        assert_eq!(movie.movie.id, c);
        assert_eq!(movie.count, 3);

        store.cast(UserId(3), a).unwrap();
        store.cast(UserId(4), b).unwrap();

        let genre = store.most_voted_genre().unwrap();
        assert_eq!(genre.genre, "Drama");
        assert_eq!(genre.count, 4);
    }
}
