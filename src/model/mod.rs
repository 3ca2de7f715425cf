//! Core data models for the song library.
//!
//! Defines the stored entity [`Song`] plus the request-side value types
//! [`SongFilters`] and [`Pagination`].
//!
//! # Database Schema
//!
//! [`Song`] maps to the `songs` table:
//! `id, group_name, song_name, release_date, text, link`.
//! On the wire the two name columns are exposed as `group` and `song`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Page number used when the caller supplies none (or an invalid one).
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller supplies none (or an invalid one).
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A song record.
///
/// Every field is optional on input; missing fields deserialize to their
/// empty value so that `{"group": "...", "song": "..."}` is a valid body.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct Song {
    /// Database ID (auto-generated, 0 before insertion)
    pub id: i64,
    /// Performing group or artist
    #[serde(rename = "group")]
    pub group_name: String,
    /// Song title
    #[serde(rename = "song")]
    pub song_name: String,
    /// Free-form release date
    pub release_date: String,
    /// Lyrics, verses separated by a blank line
    pub text: String,
    /// Link to the song
    pub link: String,
}

impl Song {
    /// Create an unsaved song with just the identifying names.
    pub fn new(group_name: impl Into<String>, song_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            song_name: song_name.into(),
            ..Default::default()
        }
    }
}

/// Substring filters for song listings.
///
/// `None` and `Some("")` both mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilters {
    /// Case-insensitive substring of the group name
    pub group: Option<String>,
    /// Case-insensitive substring of the song name
    pub song: Option<String>,
}

impl SongFilters {
    pub fn new(group: Option<String>, song: Option<String>) -> Self {
        Self {
            group: group.filter(|g| !g.is_empty()),
            song: song.filter(|s| !s.is_empty()),
        }
    }

    /// True when neither filter restricts the result.
    pub fn is_empty(&self) -> bool {
        self.group.as_deref().is_none_or(str::is_empty)
            && self.song.as_deref().is_none_or(str::is_empty)
    }
}

/// Offset pagination window. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Build a pagination window, replacing non-positive values with defaults.
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            per_page: positive_or(per_page, DEFAULT_PER_PAGE),
        }
    }

    /// Build a pagination window from raw query-string values.
    ///
    /// Absent, unparsable and non-positive values fall back to
    /// page 1 / 10 per page.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0);
        Self::new(parse(page), parse(per_page))
    }

    /// Number of rows to skip: `(page - 1) * per_page`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Number of rows to take.
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

fn positive_or(value: i64, default: u32) -> u32 {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_json_field_names() {
        let song = Song {
            id: 7,
            group_name: "Muse".to_string(),
            song_name: "Supermassive Black Hole".to_string(),
            release_date: "16.07.2006".to_string(),
            text: "Ooh baby".to_string(),
            link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_string(),
        };

        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["group"], "Muse");
        assert_eq!(value["song"], "Supermassive Black Hole");
        assert_eq!(value["release_date"], "16.07.2006");
        assert!(value.get("group_name").is_none());
    }

    #[test]
    fn test_song_partial_body_uses_defaults() {
        let song: Song = serde_json::from_str(r#"{"group": "Muse", "song": "Uprising"}"#).unwrap();
        assert_eq!(song.id, 0);
        assert_eq!(song.group_name, "Muse");
        assert_eq!(song.song_name, "Uprising");
        assert!(song.text.is_empty());
    }

    #[test]
    fn test_filters_treat_empty_as_absent() {
        let filters = SongFilters::new(Some(String::new()), None);
        assert!(filters.is_empty());
        assert_eq!(filters.group, None);

        let filters = SongFilters::new(Some("mu".to_string()), None);
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_pagination_defaults() {
        assert_eq!(Pagination::default(), Pagination::new(1, 10));
        assert_eq!(Pagination::from_params(None, None), Pagination::default());
        assert_eq!(
            Pagination::from_params(Some("abc"), Some("")),
            Pagination::default()
        );
        assert_eq!(
            Pagination::from_params(Some("0"), Some("-5")),
            Pagination::default()
        );
    }

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(3, 25).offset(), 50);
        assert_eq!(Pagination::from_params(Some("4"), Some("2")).offset(), 6);
    }
}
