//! Music info API Data Transfer Objects
//!
//! These types match what the upstream `/info` endpoint returns.
//! DO NOT use these types outside the musicinfo module - convert to domain types.

use serde::{Deserialize, Serialize};

/// Response of `GET /info?group=..&song=..`
///
/// Fields default to empty so that a partial body reaches the adapter,
/// which reports exactly which field is missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongDetailResponse {
    /// Release date as free-form text
    pub release_date: String,
    /// Lyrics text
    pub text: String,
    /// Link to the song
    pub link: String,
}

/// Error body some deployments return alongside 4xx/5xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}
