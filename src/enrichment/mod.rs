//! Song enrichment - fills in release date, lyrics and link for new songs.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types used by the song service
//! - **API DTOs** (`musicinfo/dto.rs`) - Exact upstream response shapes
//! - **Adapter** - Converts DTOs to domain models and rejects incomplete ones
//! - **Client** - HTTP client for the upstream music info service
//! - **Placeholder** - Offline provider with deterministic values
//! - **Service** - Chooses the provider from configuration
//!
//! # Usage
//!
//! ```ignore
//! use song_library::enrichment::build_provider;
//!
//! let provider = build_provider(&config.enrichment)?;
//! let details = provider.fetch("Muse", "Supermassive Black Hole").await?;
//! ```

pub mod domain;
pub mod musicinfo;
pub mod placeholder;
pub mod service;
pub mod traits;

pub use domain::{EnrichmentError, EnrichmentSource, SongDetails};
pub use musicinfo::MusicInfoClient;
pub use placeholder::PlaceholderDetails;
pub use service::build_provider;
pub use traits::SongDetailsApi;
