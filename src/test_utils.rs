//! Test utilities and fixtures for song library tests.
//!
//! # Example
//!
//! ```ignore
//! use song_library::test_utils::{temp_db, insert_mock_song};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (pool, _dir) = temp_db().await;
//!     let id = insert_mock_song(&pool, "Muse", "Uprising").await;
//!     // ... test logic
//! }
//! ```

use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;

use crate::model::Song;

/// Creates a temporary database for testing.
///
/// The database lives in a temporary directory that is removed when the
/// returned `TempDir` is dropped. Migrations are run automatically.
/// Keep the TempDir alive for the duration of your test.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_url = crate::db::db_url(Some(dir.path().join("test.db").as_path()));

    let pool = crate::db::init_db(&db_url, crate::db::DEFAULT_MAX_CONNECTIONS)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

/// Creates an unsaved, fully populated song.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let song = Song {
///     text: "A\n\nB".to_string(),
///     ..mock_song("Muse", "Uprising")
/// };
/// ```
pub fn mock_song(group: &str, song: &str) -> Song {
    Song {
        release_date: "16.07.2006".to_string(),
        text: format!("First verse of {song}\n\nSecond verse of {song}"),
        link: format!("https://example.com/{}", urlencoding::encode(song)),
        ..Song::new(group, song)
    }
}

/// Inserts a mock song into the database and returns its ID.
pub async fn insert_mock_song(pool: &SqlitePool, group: &str, song: &str) -> i64 {
    crate::db::insert_song(pool, &mock_song(group, song))
        .await
        .expect("Failed to insert song")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_temp_db_creates_working_database() {
        let (pool, _dir) = temp_db().await;

        let songs = crate::db::get_all_songs(&pool).await.unwrap();
        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn test_insert_mock_song() {
        let (pool, _dir) = temp_db().await;

        let id = insert_mock_song(&pool, "Muse", "Uprising").await;
        assert!(id > 0);

        let songs = crate::db::get_all_songs(&pool).await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].group_name, "Muse");
    }

    #[test]
    fn test_mock_song_is_complete() {
        let song = mock_song("Muse", "Uprising");
        assert_eq!(song.id, 0);
        assert!(!song.release_date.is_empty());
        assert!(song.text.contains("\n\n"));
        assert_eq!(song.link, "https://example.com/Uprising");
    }
}
