//! CineChat HTTP server binary.
//!
//! Configuration comes from the environment: `TMDB_API_KEY` and
//! `HUGGINGFACE_API_KEY` gate the external calls (the server runs without
//! them, degrading to canned replies), `CINECHAT_ADDR` overrides the bind
//! address.

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hf_client::HfClient;
use server::{router, ChatResponder};
use tmdb_client::TmdbClient;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let tmdb_key = env::var("TMDB_API_KEY").ok().filter(|k| !k.is_empty());
    let hf_key = env::var("HUGGINGFACE_API_KEY").ok().filter(|k| !k.is_empty());
    if tmdb_key.is_none() {
        warn!("TMDB_API_KEY is not set; catalog queries will return no results");
    }
    if hf_key.is_none() {
        warn!("HUGGINGFACE_API_KEY is not set; using deterministic fallback replies only");
    }

    let responder = Arc::new(ChatResponder::new(TmdbClient::new(tmdb_key), HfClient::new(hf_key)));

    let addr = env::var("CINECHAT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("CineChat listening on http://{addr}");

    axum::serve(listener, router(responder))
        .await
        .context("server error")?;
    Ok(())
}
