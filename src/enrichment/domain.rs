//! Internal domain models for song detail enrichment.
//!
//! These types are OUR types - they don't change when the upstream info
//! service changes. Upstream responses get converted into these types via
//! the adapter in `musicinfo`.

use std::fmt;

/// Details filled in for a song before it is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDetails {
    /// Free-form release date (e.g. "16.07.2006")
    pub release_date: String,
    /// Lyrics, verses separated by a blank line
    pub text: String,
    /// Link to the song
    pub link: String,
}

impl SongDetails {
    /// Name of the first empty field, if any.
    ///
    /// Stored songs must always carry all three details.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.release_date.is_empty() {
            Some("releaseDate")
        } else if self.text.is_empty() {
            Some("text")
        } else if self.link.is_empty() {
            Some("link")
        } else {
            None
        }
    }
}

/// Where song details came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentSource {
    /// Remote music info service
    MusicInfo,
    /// Deterministic local placeholder values
    Placeholder,
}

impl fmt::Display for EnrichmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MusicInfo => f.write_str("music-info"),
            Self::Placeholder => f.write_str("placeholder"),
        }
    }
}

/// Errors that can occur during enrichment
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No details found for {group} - {song}")]
    NotFound { group: String, song: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
