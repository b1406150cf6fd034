use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pagination::DEFAULT_PAGE_SIZE;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("marquee.db")
}

/// Where uploaded media is served from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Prefix for watch locations; the uploaded file name is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "localhost:8080/movies".to_string()
}

/// Listing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Page size used when the caller does not ask for one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Largest page size served; bigger requests are capped.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u32 {
    100
}

/// Sanitized config for display (nothing is secret yet; the database location is reduced
/// to its file name)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub database_file: String,
    pub media: MediaConfig,
    pub pagination: PaginationConfig,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            database_file: config
                .database
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            media: config.media.clone(),
            pagination: config.pagination.clone(),
        }
    }
}
