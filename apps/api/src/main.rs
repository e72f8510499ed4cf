mod config;
mod editor;
mod errors;
mod gateway;
mod llm_client;
mod models;
mod render;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::{DisabledGateway, LlmGateway, TextGateway};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting QuickBio API v{}", env!("CARGO_PKG_VERSION"));

    let gateway: Arc<dyn TextGateway> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("Text improvement enabled (model: {})", llm_client::MODEL);
            Arc::new(LlmGateway::new(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; text improvement disabled");
            Arc::new(DisabledGateway)
        }
    };

    match config.gateway_timeout {
        Some(timeout) => info!("Gateway timeout: {timeout:?}"),
        None => info!("Gateway timeout disabled"),
    }

    let state = AppState {
        sessions: SessionStore::new(),
        gateway,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
