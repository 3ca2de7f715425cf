//! Trait definition for song detail providers.
//!
//! The song service only sees [`SongDetailsApi`]. Production wiring picks
//! either the real [`MusicInfoClient`] or the offline
//! [`PlaceholderDetails`]; tests substitute the mocks below.
//!
//! # Example
//!
//! ```ignore
//! use song_library::enrichment::traits::SongDetailsApi;
//!
//! async fn describe<T: SongDetailsApi + ?Sized>(provider: &T) {
//!     let details = provider.fetch("Muse", "Uprising").await?;
//!     println!("{} via {}", details.release_date, provider.source());
//! }
//! ```

use async_trait::async_trait;

use super::domain::{EnrichmentError, EnrichmentSource, SongDetails};
use super::musicinfo::MusicInfoClient;
use super::placeholder::PlaceholderDetails;

/// Trait for looking up details of a song by group and song name.
///
/// Implementations are shared across concurrent requests.
#[async_trait]
pub trait SongDetailsApi: Send + Sync {
    /// Fetch release date, lyrics and link for a song.
    async fn fetch(&self, group: &str, song: &str) -> Result<SongDetails, EnrichmentError>;

    /// Where the details come from (for logging).
    fn source(&self) -> EnrichmentSource;
}

#[async_trait]
impl SongDetailsApi for MusicInfoClient {
    async fn fetch(&self, group: &str, song: &str) -> Result<SongDetails, EnrichmentError> {
        self.fetch_details(group, song).await
    }

    fn source(&self) -> EnrichmentSource {
        EnrichmentSource::MusicInfo
    }
}

#[async_trait]
impl SongDetailsApi for PlaceholderDetails {
    async fn fetch(&self, _group: &str, song: &str) -> Result<SongDetails, EnrichmentError> {
        Ok(self.details_for(song))
    }

    fn source(&self) -> EnrichmentSource {
        EnrichmentSource::Placeholder
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder_through_trait() {
        let provider: &dyn SongDetailsApi = &PlaceholderDetails::new();
        let details = provider.fetch("Muse", "Uprising").await.unwrap();
        assert_eq!(details.text, "Sample lyrics for Uprising");
        assert_eq!(provider.source(), EnrichmentSource::Placeholder);
    }
}
