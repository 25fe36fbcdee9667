//! A named, ordered, duplicate-free list of video ids.

use super::video::VideoId;

/// A user playlist
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Name as given at creation (lookups ignore case)
    pub name: String,

    /// Member ids in insertion order
    videos: Vec<VideoId>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// Lookup key used for case-insensitive comparison
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    /// Append a video; returns false if it is already a member
    pub fn add(&mut self, id: VideoId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.videos.push(id);
        true
    }

    /// Remove a video; returns false if it was not a member
    pub fn remove(&mut self, id: &VideoId) -> bool {
        match self.videos.iter().position(|v| v == id) {
            Some(pos) => {
                self.videos.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.videos.clear();
    }

    pub fn contains(&self, id: &VideoId) -> bool {
        self.videos.contains(id)
    }

    pub fn videos(&self) -> &[VideoId] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Normalize a playlist name for case-insensitive lookup
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}
