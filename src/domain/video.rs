//! Video identity.
//!
//! A `Video` never changes after the catalog is built. Moderation state
//! lives in the flag registry and is joined back in through `VideoListing`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog-unique video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Human-readable title
    pub title: String,

    /// Unique identifier
    pub id: VideoId,

    /// Tags in source order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(title: impl Into<String>, id: impl Into<VideoId>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            tags: Vec::new(),
        }
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Case-insensitive substring match against the title
    pub fn title_matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive substring match against any tag
    pub fn tag_matches(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

// Identity is the id alone; titles and tags are descriptive.
impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Video {}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

/// A video paired with its current moderation state, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoListing {
    pub video: Video,

    /// Flag reason, present only while the video is flagged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_reason: Option<String>,
}

impl fmt::Display for VideoListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.video)?;
        if let Some(reason) = &self.flag_reason {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }
        Ok(())
    }
}
