//! Read-only catalog of every known video.
//!
//! Built once at startup and shared (behind an `Arc`) for the rest of the
//! process. Videos keep their source order; lookups go through id and title
//! indexes into that list.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{Video, VideoId};

use super::source::CatalogError;

/// Catalog of all loaded videos
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    /// Videos in source order
    videos: Vec<Video>,

    /// id -> index into `videos`
    by_id: HashMap<VideoId, usize>,

    /// title -> index into `videos`
    by_title: HashMap<String, usize>,
}

impl VideoCatalog {
    /// Build a catalog, rejecting blank ids or titles and duplicate ids.
    ///
    /// Duplicate titles are accepted; the title index keeps the last one.
    pub fn new(videos: Vec<Video>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(videos.len());
        let mut by_title = HashMap::with_capacity(videos.len());

        for (idx, video) in videos.iter().enumerate() {
            let blank = if video.id.as_str().trim().is_empty() {
                Some("empty video id")
            } else if video.title.trim().is_empty() {
                Some("empty title")
            } else {
                None
            };
            if let Some(reason) = blank {
                return Err(CatalogError::InvalidEntry {
                    position: idx + 1,
                    reason: reason.to_string(),
                });
            }

            if by_id.insert(video.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(video.id.to_string()));
            }
            if let Some(prev) = by_title.insert(video.title.clone(), idx) {
                warn!(
                    title = %video.title,
                    shadowed = %videos[prev].id,
                    "Duplicate title in catalog, keeping the later entry"
                );
            }
        }

        Ok(Self {
            videos,
            by_id,
            by_title,
        })
    }

    /// All videos in source order
    pub fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    /// Get a video by id
    pub fn by_id(&self, id: &VideoId) -> Option<&Video> {
        self.by_id.get(id).map(|&idx| &self.videos[idx])
    }

    /// Get a video by exact title
    pub fn by_title(&self, title: &str) -> Option<&Video> {
        self.by_title.get(title).map(|&idx| &self.videos[idx])
    }

    /// Get the number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
