//! Song store abstraction.
//!
//! The song service talks to persistence only through [`SongStore`].
//! [`crate::db::SqliteSongStore`] is the production implementation; tests
//! use the in-memory mock below.

use async_trait::async_trait;

use crate::library::query::SongQuery;
use crate::model::Song;

/// Errors raised by a song store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Query or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at start-up
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence contract for song records.
///
/// Implementations must be safe to share between concurrent requests; the
/// service adds no locking of its own.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Insert a song and return it with its assigned ID (input ID ignored).
    async fn add(&self, song: &Song) -> Result<Song, StoreError>;

    /// Every stored song, ascending by ID.
    async fn list_all(&self) -> Result<Vec<Song>, StoreError>;

    /// One page of songs matching every predicate of `query`, ascending by ID.
    async fn list_filtered(&self, query: &SongQuery) -> Result<Vec<Song>, StoreError>;

    /// Look up a song by ID.
    async fn find(&self, id: i64) -> Result<Option<Song>, StoreError>;

    /// Overwrite the song with `song.id`. Returns rows affected.
    async fn update(&self, song: &Song) -> Result<u64, StoreError>;

    /// Delete the song with `id`. Returns rows affected.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}

/// In-memory store for testing.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Vec-backed store that mimics the SQLite store's semantics.
    #[derive(Default)]
    pub struct MockSongStore {
        songs: Mutex<Vec<Song>>,
        next_id: Mutex<i64>,
        /// When set, every call fails as if the pool had been closed
        pub fail: bool,
    }

    impl MockSongStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// A store whose every operation fails.
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        /// Snapshot of stored songs.
        pub fn songs(&self) -> Vec<Song> {
            self.songs.lock().unwrap().clone()
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Database(sqlx::Error::PoolClosed));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SongStore for MockSongStore {
        async fn add(&self, song: &Song) -> Result<Song, StoreError> {
            self.check()?;
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let stored = Song {
                id: *next_id,
                ..song.clone()
            };
            self.songs.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn list_all(&self) -> Result<Vec<Song>, StoreError> {
            self.check()?;
            Ok(self.songs())
        }

        async fn list_filtered(&self, query: &SongQuery) -> Result<Vec<Song>, StoreError> {
            self.check()?;
            let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
            Ok(self
                .songs()
                .into_iter()
                .filter(|s| query.matches(s))
                .skip(offset)
                .take(query.limit() as usize)
                .collect())
        }

        async fn find(&self, id: i64) -> Result<Option<Song>, StoreError> {
            self.check()?;
            Ok(self.songs().into_iter().find(|s| s.id == id))
        }

        async fn update(&self, song: &Song) -> Result<u64, StoreError> {
            self.check()?;
            let mut songs = self.songs.lock().unwrap();
            match songs.iter_mut().find(|s| s.id == song.id) {
                Some(existing) => {
                    *existing = song.clone();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: i64) -> Result<u64, StoreError> {
            self.check()?;
            let mut songs = self.songs.lock().unwrap();
            let before = songs.len();
            songs.retain(|s| s.id != id);
            Ok((before - songs.len()) as u64)
        }
    }
}
