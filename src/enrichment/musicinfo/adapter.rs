//! Adapter layer: Convert music info DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::enrichment::domain::{EnrichmentError, SongDetails};

/// Convert an `/info` response to song details.
///
/// Every detail must be present; an upstream that omits one is treated
/// as a failed lookup rather than silently storing a blank field.
pub fn to_details(response: dto::SongDetailResponse) -> Result<SongDetails, EnrichmentError> {
    let details = SongDetails {
        release_date: response.release_date,
        text: response.text,
        link: response.link,
    };

    match details.missing_field() {
        Some(field) => Err(EnrichmentError::InvalidResponse(format!(
            "missing field `{field}`"
        ))),
        None => Ok(details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_response_converts() {
        let response = dto::SongDetailResponse {
            release_date: "16.07.2006".to_string(),
            text: "verse one\n\nverse two".to_string(),
            link: "https://example.com/song".to_string(),
        };

        let details = to_details(response).unwrap();
        assert_eq!(details.release_date, "16.07.2006");
        assert_eq!(details.link, "https://example.com/song");
    }

    #[test]
    fn test_missing_link_is_invalid() {
        let response = dto::SongDetailResponse {
            release_date: "2006".to_string(),
            text: "verse".to_string(),
            link: String::new(),
        };

        match to_details(response) {
            Err(EnrichmentError::InvalidResponse(msg)) => assert!(msg.contains("link")),
            other => panic!("expected InvalidResponse, got {other:?}"),
        }
    }
}
