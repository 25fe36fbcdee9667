//! Moderation flags, keyed by video id.
//!
//! The registry knows nothing about playback; stopping a video that gets
//! flagged while playing is the session's job.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::VideoId;

/// Reason recorded when none is given
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("Video is already flagged: {0}")]
    AlreadyFlagged(VideoId),

    #[error("Video is not flagged: {0}")]
    NotFlagged(VideoId),
}

/// A single flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagEntry {
    pub reason: String,
}

/// Tracks which videos are flagged and why
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagRegistry {
    entries: HashMap<VideoId, FlagEntry>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a video. `None` records the default reason.
    pub fn flag(&mut self, id: &VideoId, reason: Option<&str>) -> Result<&FlagEntry, FlagError> {
        if self.entries.contains_key(id) {
            return Err(FlagError::AlreadyFlagged(id.clone()));
        }

        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON).to_string();
        Ok(self
            .entries
            .entry(id.clone())
            .or_insert(FlagEntry { reason }))
    }

    /// Remove a flag, returning the entry that was removed
    pub fn unflag(&mut self, id: &VideoId) -> Result<FlagEntry, FlagError> {
        self.entries
            .remove(id)
            .ok_or_else(|| FlagError::NotFlagged(id.clone()))
    }

    pub fn is_flagged(&self, id: &VideoId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn reason_for(&self, id: &VideoId) -> Option<&str> {
        self.entries.get(id).map(|e| e.reason.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
