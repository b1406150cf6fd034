//! Types for the movie catalog.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque movie identifier assigned by the catalog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    /// Running time in minutes.
    pub duration: u32,
    #[serde(rename = "artists")]
    pub artist: String,
    #[serde(rename = "genres")]
    pub genre: String,
    /// Where the media can be watched, derived from the uploaded file name.
    pub watch_url: String,
    /// Number of times the media was served. Never decreases.
    pub views: u64,
    pub created_at: DateTime<Utc>,
}

/// Business fields of a movie as supplied by an admin on create or update.
///
/// `file_name` is the name under which the media collaborator stored the upload;
/// the catalog only derives the watch location from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    pub duration: u32,
    #[serde(rename = "artists")]
    pub artist: String,
    #[serde(rename = "genres")]
    pub genre: String,
    pub file_name: String,
}

impl MovieDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: u32,
        artist: impl Into<String>,
        genre: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration,
            artist: artist.into(),
            genre: genre.into(),
            file_name: file_name.into(),
        }
    }

    /// Resolve the draft into the fields persisted by a [`super::CatalogStore`].
    pub fn into_fields(self, media_base_url: &str) -> MovieFields {
        let watch_url = watch_location(media_base_url, &self.file_name);
        MovieFields {
            title: self.title,
            description: self.description,
            duration: self.duration,
            artist: self.artist,
            genre: self.genre,
            watch_url,
        }
    }
}

/// The persisted, replaceable part of a movie record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieFields {
    pub title: String,
    pub description: String,
    pub duration: u32,
    pub artist: String,
    pub genre: String,
    pub watch_url: String,
}

/// Derive the watch location for an uploaded media file.
///
/// Spaces in the file name become `-`, matching how uploads are stored on disk.
/// No collision checking: two movies may point at the same location.
pub fn watch_location(base_url: &str, file_name: &str) -> String {
    let file_name = file_name.replace(' ', "-");
    format!("{}/{}", base_url.trim_end_matches('/'), file_name)
}
