//! Catalog sources.
//!
//! Two on-disk formats are supported:
//!
//! ```text
//! # videos.txt: title | id | tags
//! Funny Dogs | funny_dogs_video_id | #dog , #animal
//! Video about nothing | nothing_video_id |
//! ```
//!
//! and a JSON array of `{"title", "id", "tags"}` objects.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, instrument};

use crate::domain::Video;

use super::catalog::VideoCatalog;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Duplicate video id in catalog: {0}")]
    DuplicateId(String),

    #[error("Invalid catalog entry {position}: {reason}")]
    InvalidEntry { position: usize, reason: String },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for anything that can produce the initial video list
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable source description
    fn describe(&self) -> String;

    /// Load every video from the source
    async fn load(&self) -> Result<Vec<Video>, CatalogError>;
}

/// Load videos from a source and build the catalog
#[instrument(skip(source), fields(source = %source.describe()))]
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<VideoCatalog, CatalogError> {
    let videos = source.load().await?;
    debug!(count = videos.len(), "Catalog source loaded");
    VideoCatalog::new(videos)
}

/// Pick a source based on file extension (`.json` or pipe-delimited text)
pub fn source_for_path(path: impl Into<PathBuf>) -> Box<dyn CatalogSource> {
    let path = path.into();
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        Box::new(JsonFileSource::new(path))
    } else {
        Box::new(DelimitedFileSource::new(path))
    }
}

async fn read_source(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).await.map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Pipe-delimited text file, one video per line
#[derive(Debug, Clone)]
pub struct DelimitedFileSource {
    path: PathBuf,
}

impl DelimitedFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for DelimitedFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<Video>, CatalogError> {
        let content = read_source(&self.path).await?;
        parse_delimited(&content)
    }
}

/// Parse the `title | id | tag,tag` format
pub fn parse_delimited(content: &str) -> Result<Vec<Video>, CatalogError> {
    let mut videos = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split('|').map(str::trim).collect();
        if fields.len() < 2 {
            return Err(CatalogError::Malformed {
                line: line_no,
                reason: "expected at least title and id".to_string(),
            });
        }

        let (title, id) = (fields[0], fields[1]);
        if id.is_empty() {
            return Err(CatalogError::Malformed {
                line: line_no,
                reason: "empty video id".to_string(),
            });
        }

        let tags: Vec<String> = fields
            .get(2)
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        videos.push(Video::new(title, id).with_tags(tags));
    }

    Ok(videos)
}

/// JSON array of videos
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<Video>, CatalogError> {
        let content = read_source(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}
