//! Playlist directory.
//!
//! A single keyed collection: names compare case-insensitively for lookup
//! and uniqueness while the creation-time spelling is kept for display.

use thiserror::Error;

use crate::domain::{name_key, Playlist, VideoId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("A playlist with the same name already exists: {0}")]
    DuplicateName(String),

    #[error("Playlist does not exist: {0}")]
    NotFound(String),

    #[error("Video already in playlist: {0}")]
    DuplicateVideo(VideoId),

    #[error("Video is not in playlist: {0}")]
    NotPresent(VideoId),
}

/// All playlists, in creation order
#[derive(Debug, Clone, Default)]
pub struct PlaylistDirectory {
    playlists: Vec<Playlist>,
}

impl PlaylistDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name_key(name);
        self.playlists.iter().position(|p| p.key() == key)
    }

    /// Create an empty playlist
    pub fn create(&mut self, name: &str) -> Result<&Playlist, PlaylistError> {
        if self.position(name).is_some() {
            return Err(PlaylistError::DuplicateName(name.to_string()));
        }
        self.playlists.push(Playlist::new(name));
        Ok(&self.playlists[self.playlists.len() - 1])
    }

    pub fn get(&self, name: &str) -> Result<&Playlist, PlaylistError> {
        self.position(name)
            .map(|idx| &self.playlists[idx])
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, PlaylistError> {
        match self.position(name) {
            Some(idx) => Ok(&mut self.playlists[idx]),
            None => Err(PlaylistError::NotFound(name.to_string())),
        }
    }

    /// Delete a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist, PlaylistError> {
        let idx = self
            .position(name)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))?;
        Ok(self.playlists.remove(idx))
    }

    /// Stored names in creation order
    pub fn list_names(&self) -> Vec<&str> {
        self.playlists.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn add_video(&mut self, name: &str, id: VideoId) -> Result<(), PlaylistError> {
        let playlist = self.get_mut(name)?;
        if !playlist.add(id.clone()) {
            return Err(PlaylistError::DuplicateVideo(id));
        }
        Ok(())
    }

    pub fn remove_video(&mut self, name: &str, id: &VideoId) -> Result<(), PlaylistError> {
        let playlist = self.get_mut(name)?;
        if !playlist.remove(id) {
            return Err(PlaylistError::NotPresent(id.clone()));
        }
        Ok(())
    }

    /// Empty a playlist; already-empty playlists are fine
    pub fn clear(&mut self, name: &str) -> Result<(), PlaylistError> {
        self.get_mut(name)?.clear();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
