//! Entry points for the CLI commands.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use memory_core::now_secs;
use tracing::{info, instrument};

use crate::components::{build_default_app_state, create_vector_store};
use crate::config::ServerConfig;
use crate::http::serve;

/// Builds components and serves HTTP on `bind` (or BIND_ADDR).
#[instrument(skip(config, bind))]
pub async fn run_server(config: ServerConfig, bind: Option<String>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| config.bind_addr.clone());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address: {}", bind))?;
    info!(
        %addr,
        vector_store = %config.vector_store_type,
        recency_scope = ?config.recency_scope,
        "Starting tutor server"
    );

    let state = build_default_app_state(&config).await?;
    serve(addr, state).await
}

/// Runs one retention sweep against the configured store.
///
/// Rejects the in-memory store: a separate process would sweep a fresh, empty
/// store rather than the server's.
#[instrument(skip(config))]
pub async fn run_sweep(config: ServerConfig) -> Result<()> {
    if config.vector_store_type == "memory" {
        anyhow::bail!(
            "sweep needs a persistent vector store; VECTOR_STORE_TYPE=memory only lives inside a running server"
        );
    }
    let store = create_vector_store(&config).await?;
    let sweeper = config.memory_config().sweeper();
    sweeper.sweep(store.as_ref(), now_secs()).await;
    info!("Retention sweep finished");
    Ok(())
}
