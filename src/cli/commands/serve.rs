//! HTTP server command.

use tokio::runtime::Runtime;
use tracing::info;

use super::build_service;
use crate::config::Config;
use crate::server;

/// Run the HTTP API until Ctrl-C
pub fn cmd_serve(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    info!(
        bind = %config.server.bind,
        database = %config.database.url,
        enrichment = config.enrichment.enabled,
        music_info_url = %config.enrichment.base_url,
        "Starting song library"
    );

    rt.block_on(async {
        let service = build_service(config).await?;
        server::serve(&config.server.bind, service).await
    })
}
