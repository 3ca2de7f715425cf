//! Request handlers.
//!
//! Handlers only translate between HTTP and [`SongService`] calls;
//! pagination defaults are applied here, before the service sees them.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::response::ApiFailure;
use crate::model::{Pagination, Song, SongFilters};

/// Query string of `GET /songs`.
///
/// Page values stay strings so that garbage falls back to defaults instead
/// of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub group: Option<String>,
    pub song: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Query string of `GET /songs/:id/text`
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

pub async fn list_songs(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Song>>, ApiFailure> {
    let filters = SongFilters::new(params.group, params.song);
    let pagination = Pagination::from_params(params.page.as_deref(), params.per_page.as_deref());

    let songs = state.service.songs(&filters, pagination).await?;
    Ok(Json(songs))
}

pub async fn add_song(
    State(state): State<AppState>,
    payload: Result<Json<Song>, JsonRejection>,
) -> Result<Response, ApiFailure> {
    let Json(song) = payload.map_err(|rejection| ApiFailure::invalid_json(&rejection))?;

    let stored = state.service.add_song(song).await?;
    let location = format!("/songs/{}", stored.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

pub async fn update_song(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Song>, JsonRejection>,
) -> Result<StatusCode, ApiFailure> {
    let Path(id) = id.map_err(|rejection| ApiFailure::invalid_id(&rejection))?;
    let Json(song) = payload.map_err(|rejection| ApiFailure::invalid_json(&rejection))?;

    // The path decides which record is overwritten
    state.service.update_song(Song { id, ..song }).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_song(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiFailure> {
    let Path(id) = id.map_err(|rejection| ApiFailure::invalid_id(&rejection))?;

    state.service.delete_song(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn song_text(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<String>>, ApiFailure> {
    let Path(id) = id.map_err(|rejection| ApiFailure::invalid_id(&rejection))?;
    let pagination = Pagination::from_params(params.page.as_deref(), params.per_page.as_deref());

    let verses = state.service.song_text(id, pagination).await?;
    Ok(Json(verses))
}
