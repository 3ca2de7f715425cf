//! Music info HTTP client
//!
//! Handles communication with the upstream song details service.
//! The service exposes a single endpoint:
//!
//! ```text
//! GET {base_url}/info?group=<group>&song=<song>
//! 200 {"releaseDate": "...", "text": "...", "link": "..."}
//! ```
//!
//! Group and song names routinely contain spaces, `&` and `/`, so they are
//! passed through reqwest's query encoder rather than formatted into the URL.

use std::time::Duration;

use super::{adapter, dto};
use crate::enrichment::domain::{EnrichmentError, SongDetails};

/// User agent sent with every lookup
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Music info API client
pub struct MusicInfoClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicInfoClient {
    /// Create a new client for the given base URL.
    ///
    /// `timeout` bounds the whole request, including reading the body.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EnrichmentError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| EnrichmentError::Client(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Base URL this client talks to (without trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up details for a song
    pub async fn fetch_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetails, EnrichmentError> {
        let response = self.send_info_request(group, song).await?;
        adapter::to_details(response)
    }

    /// Send the HTTP request and parse the response
    async fn send_info_request(
        &self,
        group: &str,
        song: &str,
    ) -> Result<dto::SongDetailResponse, EnrichmentError> {
        let url = format!("{}/info", self.base_url);

        tracing::debug!(%url, group, song, "Fetching song details");

        let response = self
            .http_client
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(EnrichmentError::NotFound {
                group: group.to_string(),
                song: song.to_string(),
            });
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(EnrichmentError::ApiError(format!("HTTP {}: {}", status, error.error)));
            }
            return Err(EnrichmentError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::SongDetailResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
