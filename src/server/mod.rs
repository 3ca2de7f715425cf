//! HTTP surface of the song library.
//!
//! | Method   | Path               | Handler                    |
//! |----------|--------------------|----------------------------|
//! | `GET`    | `/health`          | [`handlers::health`]       |
//! | `GET`    | `/songs`           | [`handlers::list_songs`]   |
//! | `POST`   | `/songs`           | [`handlers::add_song`]     |
//! | `PUT`    | `/songs/:id`       | [`handlers::update_song`]  |
//! | `DELETE` | `/songs/:id`       | [`handlers::delete_song`]  |
//! | `GET`    | `/songs/:id/text`  | [`handlers::song_text`]    |

pub mod handlers;
pub mod response;

use axum::Router;
use axum::routing::{get, put};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::library::SongService;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub service: SongService,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/songs", get(handlers::list_songs).post(handlers::add_song))
        .route(
            "/songs/:id",
            put(handlers::update_song).delete(handlers::delete_song),
        )
        .route("/songs/:id/text", get(handlers::song_text))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on `bind` until Ctrl-C.
pub async fn serve(bind: &str, service: SongService) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router(AppState { service }))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
