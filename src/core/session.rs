//! Session controller: the playback state machine and every user command.
//!
//! ```text
//!            play / play_random
//!   Idle ─────────────────────────► Playing ◄──── resume ───┐
//!    ▲                               │   │                  │
//!    │      stop / flag(current)     │   └──── pause ──► Paused
//!    └───────────────────────────────┴──────────────────────┘
//! ```
//!
//! Playing a video while another is active stops the first one and reports
//! it in the outcome.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{Video, VideoId, VideoListing};
use crate::library::VideoCatalog;

use super::error::SessionError;
use super::flags::FlagRegistry;
use super::playlists::PlaylistDirectory;

pub type SessionResult<T> = Result<T, SessionError>;

/// Playback state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing playing
    #[default]
    Idle,

    Playing(VideoId),

    Paused(VideoId),
}

impl PlaybackState {
    /// The active video, paused or not
    pub fn current(&self) -> Option<&VideoId> {
        match self {
            Self::Idle => None,
            Self::Playing(id) | Self::Paused(id) => Some(id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Outcome of a successful play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Played {
    /// Video that was stopped to make room, if any
    pub stopped: Option<Video>,
    pub playing: Video,
}

/// Current playback, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub listing: VideoListing,
    pub paused: bool,
}

/// Outcome of a successful flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flagged {
    pub video: Video,
    pub reason: String,

    /// Set when the flagged video was playing and had to be stopped
    pub stopped: Option<Video>,
}

/// Playlist contents, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView {
    /// Stored name
    pub name: String,
    pub videos: Vec<VideoListing>,
}

/// Non-empty, title-ordered search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub term: String,
    pub matches: Vec<VideoListing>,
}

impl SearchResults {
    /// Pick an entry by its 1-based rank
    pub fn select(&self, position: usize) -> Option<&Video> {
        position
            .checked_sub(1)
            .and_then(|idx| self.matches.get(idx))
            .map(|listing| &listing.video)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Owns all mutable state for one user session
#[derive(Debug)]
pub struct SessionController {
    id: Uuid,
    catalog: Arc<VideoCatalog>,
    flags: FlagRegistry,
    playlists: PlaylistDirectory,
    state: PlaybackState,
}

impl SessionController {
    /// Start an idle session over a shared catalog
    pub fn new(catalog: Arc<VideoCatalog>) -> Self {
        let id = Uuid::new_v4();
        debug!(session = %id, videos = catalog.len(), "Session started");
        Self {
            id,
            catalog,
            flags: FlagRegistry::new(),
            playlists: PlaylistDirectory::new(),
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    fn is_paused(&self) -> bool {
        matches!(self.state, PlaybackState::Paused(_))
    }

    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    pub fn flags(&self) -> &FlagRegistry {
        &self.flags
    }

    pub fn playlists(&self) -> &PlaylistDirectory {
        &self.playlists
    }

    fn lookup(&self, id: &str) -> SessionResult<&Video> {
        self.catalog
            .by_id(&VideoId::from(id))
            .ok_or(SessionError::VideoNotFound)
    }

    fn listing(&self, video: &Video) -> VideoListing {
        VideoListing {
            video: video.clone(),
            flag_reason: self.flags.reason_for(&video.id).map(String::from),
        }
    }

    fn ensure_unflagged(&self, video: &Video) -> SessionResult<()> {
        match self.flags.reason_for(&video.id) {
            Some(reason) => Err(SessionError::VideoFlagged {
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn current_video(&self) -> Option<&Video> {
        self.state.current().and_then(|id| self.catalog.by_id(id))
    }

    /// Move to Idle, returning whatever was active
    fn halt(&mut self) -> Option<Video> {
        let stopped = self.current_video().cloned();
        self.state = PlaybackState::Idle;
        if let Some(video) = &stopped {
            debug!(session = %self.id, video = %video.id, "Playback stopped");
        }
        stopped
    }

    fn start(&mut self, video: Video) -> Played {
        let stopped = self.halt();
        self.state = PlaybackState::Playing(video.id.clone());
        info!(session = %self.id, video = %video.id, "Playing");
        Played {
            stopped,
            playing: video,
        }
    }

    /// Number of videos in the catalog
    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// Every catalog video, flagged ones included, ordered by title
    pub fn show_all_videos(&self) -> Vec<VideoListing> {
        let mut videos: Vec<&Video> = self.catalog.all_videos().iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        videos.into_iter().map(|v| self.listing(v)).collect()
    }

    pub fn play(&mut self, id: &str) -> SessionResult<Played> {
        let video = self.lookup(id)?;
        self.ensure_unflagged(video)?;
        let video = video.clone();
        Ok(self.start(video))
    }

    pub fn stop(&mut self) -> SessionResult<Video> {
        self.halt().ok_or(SessionError::NothingPlaying)
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random(&mut self) -> SessionResult<Played> {
        self.play_random_with(&mut rand::thread_rng())
    }

    /// Like [`play_random`](Self::play_random) with a caller-supplied RNG
    pub fn play_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SessionResult<Played> {
        let candidates: Vec<&Video> = self
            .catalog
            .all_videos()
            .iter()
            .filter(|v| !self.flags.is_flagged(&v.id))
            .collect();

        let video = candidates
            .choose(rng)
            .map(|&v| v.clone())
            .ok_or(SessionError::NoVideosAvailable)?;

        Ok(self.start(video))
    }

    pub fn pause(&mut self) -> SessionResult<Video> {
        let video = self
            .current_video()
            .cloned()
            .ok_or(SessionError::NothingPlaying)?;

        if self.is_paused() {
            return Err(SessionError::AlreadyPaused { title: video.title });
        }
        self.state = PlaybackState::Paused(video.id.clone());
        debug!(session = %self.id, video = %video.id, "Paused");
        Ok(video)
    }

    /// Continue a paused video
    pub fn resume(&mut self) -> SessionResult<Video> {
        let video = self
            .current_video()
            .cloned()
            .ok_or(SessionError::NothingPlaying)?;

        if !self.is_paused() {
            return Err(SessionError::NotPaused);
        }
        self.state = PlaybackState::Playing(video.id.clone());
        debug!(session = %self.id, video = %video.id, "Resumed");
        Ok(video)
    }

    pub fn show_playing(&self) -> SessionResult<NowPlaying> {
        let video = self.current_video().ok_or(SessionError::NothingPlaying)?;
        Ok(NowPlaying {
            listing: self.listing(video),
            paused: self.is_paused(),
        })
    }

    /// Create a playlist, returning the stored name
    pub fn create_playlist(&mut self, name: &str) -> SessionResult<String> {
        let playlist = self.playlists.create(name)?;
        debug!(session = %self.id, playlist = %playlist.name, "Playlist created");
        Ok(playlist.name.clone())
    }

    /// Add a video to a playlist, returning the added video.
    ///
    /// Checked in order: playlist exists, video exists, video unflagged,
    /// video not already a member.
    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> SessionResult<Video> {
        self.playlists.get(name)?;
        let video = self.lookup(id)?;
        self.ensure_unflagged(video)?;
        let video = video.clone();

        self.playlists.add_video(name, video.id.clone())?;
        Ok(video)
    }

    /// Remove a video from a playlist, returning the removed video
    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> SessionResult<Video> {
        self.playlists.get(name)?;
        let video = self.lookup(id)?.clone();

        self.playlists.remove_video(name, &video.id)?;
        Ok(video)
    }

    pub fn clear_playlist(&mut self, name: &str) -> SessionResult<()> {
        Ok(self.playlists.clear(name)?)
    }

    /// Delete a playlist, returning its stored name
    pub fn delete_playlist(&mut self, name: &str) -> SessionResult<String> {
        let playlist = self.playlists.delete(name)?;
        debug!(session = %self.id, playlist = %playlist.name, "Playlist deleted");
        Ok(playlist.name)
    }

    /// Stored playlist names, sorted ascending
    pub fn list_playlists(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .playlists
            .list_names()
            .into_iter()
            .map(String::from)
            .collect();
        names.sort();
        names
    }

    pub fn show_playlist(&self, name: &str) -> SessionResult<PlaylistView> {
        let playlist = self.playlists.get(name)?;
        let videos = playlist
            .videos()
            .iter()
            .filter_map(|id| self.catalog.by_id(id))
            .map(|v| self.listing(v))
            .collect();

        Ok(PlaylistView {
            name: playlist.name.clone(),
            videos,
        })
    }

    fn search_where(&self, term: &str, pred: impl Fn(&Video) -> bool) -> SessionResult<SearchResults> {
        let mut found: Vec<&Video> = self
            .catalog
            .all_videos()
            .iter()
            .filter(|v| !self.flags.is_flagged(&v.id) && pred(*v))
            .collect();

        if found.is_empty() {
            return Err(SessionError::NoResults {
                term: term.to_string(),
            });
        }

        // Stable: equal titles keep catalog order
        found.sort_by(|a, b| a.title.cmp(&b.title));

        Ok(SearchResults {
            term: term.to_string(),
            matches: found.into_iter().map(|v| self.listing(v)).collect(),
        })
    }

    /// Search unflagged videos by title
    pub fn search(&self, term: &str) -> SessionResult<SearchResults> {
        self.search_where(term, |v| v.title_matches(term))
    }

    /// Search unflagged videos by tag
    pub fn search_by_tag(&self, tag: &str) -> SessionResult<SearchResults> {
        self.search_where(tag, |v| v.tag_matches(tag))
    }

    /// Flag a video. Stops it first if it is the active one.
    pub fn flag(&mut self, id: &str, reason: Option<&str>) -> SessionResult<Flagged> {
        let video = self.lookup(id)?.clone();
        let reason = self.flags.flag(&video.id, reason)?.reason.clone();

        let stopped = if self.state.current() == Some(&video.id) {
            self.halt()
        } else {
            None
        };

        info!(session = %self.id, video = %video.id, %reason, "Video flagged");
        Ok(Flagged {
            video,
            reason,
            stopped,
        })
    }

    /// Remove a flag
    pub fn allow(&mut self, id: &str) -> SessionResult<Video> {
        let video = self.lookup(id)?.clone();
        self.flags.unflag(&video.id)?;
        info!(session = %self.id, video = %video.id, "Flag removed");
        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionController {
        let catalog = VideoCatalog::new(vec![
            Video::new("Funny Dogs", "funny_dogs_video_id").with_tags(["#dog", "#animal"]),
            Video::new("Amazing Cats", "amazing_cats_video_id").with_tags(["#cat", "#animal"]),
            Video::new("Another Cat Video", "another_cat_video_id").with_tags(["#cat", "#animal"]),
        ])
        .unwrap();
        SessionController::new(Arc::new(catalog))
    }

    #[test]
    fn test_starts_idle() {
        let s = session();
        assert_eq!(s.state(), &PlaybackState::Idle);
        assert_eq!(s.show_playing(), Err(SessionError::NothingPlaying));
    }

    #[test]
    fn test_pause_resume_cycle() {
        let mut s = session();
        s.play("funny_dogs_video_id").unwrap();

        assert_eq!(s.resume(), Err(SessionError::NotPaused));
        assert_eq!(s.pause().unwrap().title, "Funny Dogs");
        assert_eq!(
            s.pause(),
            Err(SessionError::AlreadyPaused {
                title: "Funny Dogs".to_string()
            })
        );
        assert!(s.show_playing().unwrap().paused);

        assert_eq!(s.resume().unwrap().title, "Funny Dogs");
        assert_eq!(
            s.state(),
            &PlaybackState::Playing(VideoId::new("funny_dogs_video_id"))
        );
    }

    #[test]
    fn test_play_clears_pause() {
        let mut s = session();
        s.play("funny_dogs_video_id").unwrap();
        s.pause().unwrap();

        let played = s.play("amazing_cats_video_id").unwrap();
        assert_eq!(played.stopped.unwrap().title, "Funny Dogs");
        assert!(!s.show_playing().unwrap().paused);
    }

    #[test]
    fn test_stop_after_pause_returns_to_idle() {
        let mut s = session();
        s.play("funny_dogs_video_id").unwrap();
        s.pause().unwrap();

        assert_eq!(s.stop().unwrap().title, "Funny Dogs");
        assert!(s.state().is_idle());
        assert_eq!(s.pause(), Err(SessionError::NothingPlaying));
        assert_eq!(s.resume(), Err(SessionError::NothingPlaying));
    }

    #[test]
    fn test_flag_paused_video_stops_it() {
        let mut s = session();
        s.play("amazing_cats_video_id").unwrap();
        s.pause().unwrap();

        let flagged = s.flag("amazing_cats_video_id", None).unwrap();
        assert_eq!(flagged.stopped.unwrap().title, "Amazing Cats");
        assert!(s.state().is_idle());
    }

    #[test]
    fn test_flag_other_video_keeps_playing() {
        let mut s = session();
        s.play("funny_dogs_video_id").unwrap();

        let flagged = s.flag("amazing_cats_video_id", Some("dont_like_cats")).unwrap();
        assert!(flagged.stopped.is_none());
        assert_eq!(flagged.reason, "dont_like_cats");
        assert_eq!(
            s.state(),
            &PlaybackState::Playing(VideoId::new("funny_dogs_video_id"))
        );
    }

    #[test]
    fn test_search_results_select_is_one_based() {
        let s = session();
        let results = s.search("cat").unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results.select(1).unwrap().title, "Amazing Cats");
        assert_eq!(results.select(2).unwrap().title, "Another Cat Video");
        assert!(results.select(0).is_none());
        assert!(results.select(3).is_none());
    }
}
