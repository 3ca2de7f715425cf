//! Enrichment wiring - picks the song details provider from configuration
//!
//! - `enabled = true`  → [`MusicInfoClient`] against `base_url`
//! - `enabled = false` → [`PlaceholderDetails`], no network access

use std::sync::Arc;
use std::time::Duration;

use crate::config::EnrichmentConfig;
use crate::enrichment::{
    domain::EnrichmentError, musicinfo::MusicInfoClient, placeholder::PlaceholderDetails,
    traits::SongDetailsApi,
};

/// Build the details provider described by `config`.
///
/// Fails only when the real client is requested and cannot be constructed
/// (empty base URL or HTTP client setup failure).
pub fn build_provider(config: &EnrichmentConfig) -> Result<Arc<dyn SongDetailsApi>, EnrichmentError> {
    if !config.enabled {
        tracing::info!("Enrichment disabled, using placeholder details");
        return Ok(Arc::new(PlaceholderDetails::new()));
    }

    let base_url = config.base_url.trim();
    if base_url.is_empty() {
        return Err(EnrichmentError::Client(
            "enrichment is enabled but no base_url is configured".to_string(),
        ));
    }

    let client = MusicInfoClient::new(base_url, Duration::from_secs(config.timeout_secs))?;
    tracing::info!(base_url = client.base_url(), "Using music info service");
    Ok(Arc::new(client))
}
