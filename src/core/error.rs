//! Failures reported by session operations.
//!
//! Every failure is an expected, recoverable outcome. The `Display` text is
//! the bare reason; the console adds the operation-specific prefix.

use thiserror::Error;

use super::flags::FlagError;
use super::playlists::PlaylistError;

/// Broad failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A video, playlist or playlist-member lookup missed
    NotFound,

    /// A name, membership or flag collision
    AlreadyExists,

    /// The operation does not apply to the current playback or flag state
    InvalidState,

    /// Blocked by moderation policy
    Flagged,

    /// Nothing to return
    Empty,
}

/// Session operation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { reason: String },

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    DuplicateName,

    #[error("Video already added")]
    DuplicateVideo,

    #[error("Video is not in playlist")]
    NotPresent,

    #[error("No search results for {term}")]
    NoResults { term: String },

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VideoNotFound | Self::PlaylistNotFound | Self::NotPresent => ErrorKind::NotFound,
            Self::DuplicateName | Self::DuplicateVideo | Self::AlreadyFlagged => {
                ErrorKind::AlreadyExists
            }
            Self::NothingPlaying | Self::AlreadyPaused { .. } | Self::NotPaused | Self::NotFlagged => {
                ErrorKind::InvalidState
            }
            Self::VideoFlagged { .. } => ErrorKind::Flagged,
            Self::NoVideosAvailable | Self::NoResults { .. } => ErrorKind::Empty,
        }
    }
}

impl From<FlagError> for SessionError {
    fn from(e: FlagError) -> Self {
        match e {
            FlagError::AlreadyFlagged(_) => Self::AlreadyFlagged,
            FlagError::NotFlagged(_) => Self::NotFlagged,
        }
    }
}

impl From<PlaylistError> for SessionError {
    fn from(e: PlaylistError) -> Self {
        match e {
            PlaylistError::DuplicateName(_) => Self::DuplicateName,
            PlaylistError::NotFound(_) => Self::PlaylistNotFound,
            PlaylistError::DuplicateVideo(_) => Self::DuplicateVideo,
            PlaylistError::NotPresent(_) => Self::NotPresent,
        }
    }
}
