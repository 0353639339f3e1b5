mod config;
mod directory;
mod errors;
mod models;
mod notion_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::directory::sources::NotionDirectory;
use crate::notion_client::NotionClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Chef Dhundo API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize content backend client
    let notion = NotionClient::new(config.notion_api_key.clone(), config.notion_api_url.clone())?;
    info!("Notion client initialized ({})", config.notion_api_url);

    let directory = Arc::new(NotionDirectory::new(
        notion,
        config.resume_database_id.clone(),
        config.users_database_id.clone(),
    ));

    // Build app state
    let state = AppState {
        resumes: directory.clone(),
        users: directory,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the site domain once deployed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
