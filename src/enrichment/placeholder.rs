//! Placeholder details used when no music info service is configured.
//!
//! Values are deterministic and derived from the song name, so every stored
//! song still carries a release date, lyrics and a link.

use crate::enrichment::domain::SongDetails;

/// Release date assigned to every placeholder song
pub const PLACEHOLDER_RELEASE_DATE: &str = "2024-01-01";

/// Base URL for generated placeholder links
const PLACEHOLDER_LINK_BASE: &str = "https://example.com/";

/// Offline provider that fabricates details instead of calling out
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderDetails;

impl PlaceholderDetails {
    pub fn new() -> Self {
        Self
    }

    /// Build placeholder details for a song
    pub fn details_for(&self, song: &str) -> SongDetails {
        SongDetails {
            release_date: PLACEHOLDER_RELEASE_DATE.to_string(),
            text: format!("Sample lyrics for {}", song),
            link: format!("{}{}", PLACEHOLDER_LINK_BASE, urlencoding::encode(song)),
        }
    }
}
