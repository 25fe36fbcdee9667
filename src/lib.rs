//! video-player - Single-user video playback console
//!
//! A catalog of videos that can be played, paused, searched, flagged and
//! organized into named playlists.
//!
//! # Architecture
//!
//! Every user command is one synchronous call into a `SessionController`,
//! which owns all mutable state:
//! - The playback state machine (Idle / Playing / Paused)
//! - A flag registry (which videos are blocked, and why)
//! - A playlist directory (case-insensitive names)
//!
//! The catalog is loaded once at startup and shared read-only.
//!
//! # Modules
//!
//! - `domain`: Data structures (Video, Playlist)
//! - `library`: Catalog and catalog sources
//! - `core`: Session logic (SessionController, FlagRegistry, PlaylistDirectory)
//! - `cli`: Command-line interface and interactive console
//! - `config`: Layered configuration
//!
//! # Usage
//!
//! ```bash
//! # Start the console over ./videos.txt
//! video-player
//!
//! # Use another catalog
//! video-player --catalog data/videos.json
//!
//! # One-shot views
//! video-player videos --json
//! video-player search cat --tag
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use core::{ErrorKind, PlaybackState, SessionController, SessionError};
pub use domain::{Playlist, Video, VideoId, VideoListing};
pub use library::{CatalogError, CatalogSource, VideoCatalog};
