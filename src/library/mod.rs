//! Song library service - validation, enrichment and paginated reads.
//!
//! [`SongService`] is the only entry point used by the HTTP handlers and the
//! CLI. It holds shared handles to a [`SongStore`] and a
//! [`SongDetailsApi`] and nothing else, so cloning it per request is cheap
//! and concurrent calls need no coordination here.
//!
//! Each operation makes at most one store round trip; adding a song makes
//! one details lookup first and writes nothing if that lookup fails.

pub mod query;
pub mod store;
pub mod verses;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::enrichment::SongDetailsApi;
use crate::error::{Error, Result};
use crate::model::{Pagination, Song, SongFilters};

use query::SongQuery;
pub use store::{SongStore, StoreError};

/// Song operations over a store and a details provider
#[derive(Clone)]
pub struct SongService {
    store: Arc<dyn SongStore>,
    details: Arc<dyn SongDetailsApi>,
}

impl SongService {
    pub fn new(store: Arc<dyn SongStore>, details: Arc<dyn SongDetailsApi>) -> Self {
        Self { store, details }
    }

    /// Validate, enrich and persist a new song.
    ///
    /// Any input ID and details are ignored: details always come from the
    /// configured provider. Returns the stored record with its new ID.
    pub async fn add_song(&self, song: Song) -> Result<Song> {
        debug!(group = %song.group_name, song = %song.song_name, "Adding new song");

        if song.group_name.trim().is_empty() || song.song_name.trim().is_empty() {
            warn!("Rejected song without group or song name");
            return Err(Error::validation("group name and song name are required"));
        }

        let details = self
            .details
            .fetch(&song.group_name, &song.song_name)
            .await
            .inspect_err(|e| {
                warn!(source = %self.details.source(), error = %e, "Song details lookup failed");
            })?;

        let enriched = Song {
            id: 0,
            release_date: details.release_date,
            text: details.text,
            link: details.link,
            ..song
        };

        let stored = self.store.add(&enriched).await?;

        info!(
            id = stored.id,
            group = %stored.group_name,
            song = %stored.song_name,
            source = %self.details.source(),
            "Song added"
        );
        Ok(stored)
    }

    /// One page of songs matching `filters`, ascending by ID.
    ///
    /// `pagination` is expected to be normalised by the caller.
    pub async fn songs(&self, filters: &SongFilters, pagination: Pagination) -> Result<Vec<Song>> {
        debug!(
            filtered = !filters.is_empty(),
            group = ?filters.group,
            song = ?filters.song,
            page = pagination.page,
            per_page = pagination.per_page,
            "Fetching songs with filters"
        );

        let query = SongQuery::from_filters(filters, pagination);
        let songs = self.store.list_filtered(&query).await?;

        debug!(count = songs.len(), "Songs fetched");
        Ok(songs)
    }

    /// Every stored song, ascending by ID.
    pub async fn all_songs(&self) -> Result<Vec<Song>> {
        let songs = self.store.list_all().await?;
        debug!(count = songs.len(), "Fetched all songs");
        Ok(songs)
    }

    /// One page of a song's verses.
    ///
    /// Fails with [`Error::NotFound`] when no song has `id`; a page past the
    /// last verse is an empty result.
    pub async fn song_text(&self, id: i64, pagination: Pagination) -> Result<Vec<String>> {
        debug!(id, page = pagination.page, per_page = pagination.per_page, "Fetching song text");

        // Store IDs start at 1; skip the round trip for impossible IDs
        if id <= 0 {
            return Err(Error::not_found(id));
        }

        let song = self.store.find(id).await?.ok_or_else(|| {
            debug!(id, "Song not found");
            Error::not_found(id)
        })?;

        let page = verses::page_verses(&song.text, pagination);
        if page.is_empty() {
            debug!(id, page = pagination.page, "No verses on requested page");
        }
        Ok(page)
    }

    /// Overwrite every field of the song with `song.id`.
    ///
    /// Updating an ID that does not exist is not an error.
    pub async fn update_song(&self, song: Song) -> Result<()> {
        debug!(id = song.id, song = %song.song_name, "Updating song");

        if song.id <= 0 {
            return Err(Error::validation("song ID is required for update"));
        }

        let affected = self.store.update(&song).await?;
        if affected == 0 {
            warn!(id = song.id, "Update matched no song");
        } else {
            info!(id = song.id, "Song updated");
        }
        Ok(())
    }

    /// Delete the song with `id`.
    ///
    /// Deleting an ID that does not exist is not an error.
    pub async fn delete_song(&self, id: i64) -> Result<()> {
        debug!(id, "Deleting song");

        if id <= 0 {
            return Err(Error::validation("song ID is required for delete"));
        }

        let affected = self.store.delete(id).await?;
        if affected == 0 {
            warn!(id, "Delete matched no song");
        } else {
            info!(id, "Song deleted");
        }
        Ok(())
    }
}
