//! Core session logic.
//!
//! This module contains:
//! - FlagRegistry: Moderation flags keyed by video id
//! - PlaylistDirectory: Case-insensitive named playlists
//! - SessionController: Playback state machine and command handlers
//! - SessionError: Typed failure outcomes

pub mod error;
pub mod flags;
pub mod playlists;
pub mod session;

// Re-export commonly used types
pub use error::{ErrorKind, SessionError};
pub use flags::{FlagEntry, FlagError, FlagRegistry, DEFAULT_FLAG_REASON};
pub use playlists::{PlaylistDirectory, PlaylistError};
pub use session::{
    Flagged, NowPlaying, PlaybackState, Played, PlaylistView, SearchResults, SessionController,
    SessionResult,
};
