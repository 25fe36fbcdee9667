//! Domain types for the video player.
//!
//! This module contains the core data structures:
//! - Video: Immutable catalog entry and its display listing
//! - Playlist: Named, ordered collection of video ids

pub mod playlist;
pub mod video;

// Re-export commonly used types
pub use playlist::{name_key, Playlist};
pub use video::{Video, VideoId, VideoListing};
