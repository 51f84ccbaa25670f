mod config;
mod content;
mod errors;
mod language;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::source::{ContentSource, DirSource, HttpSource};
use crate::content::status::ContentState;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cv-web v{}", env!("CARGO_PKG_VERSION"));

    let source: Arc<dyn ContentSource> = match &config.content_url {
        Some(url) => {
            info!("Content source: HTTP ({url})");
            Arc::new(HttpSource::new(url.clone()))
        }
        None => {
            info!("Content source: directory ({})", config.content_dir);
            Arc::new(DirSource::new(&config.content_dir))
        }
    };

    // Kick off the five document loads; requests arriving before they finish
    // see the loading page.
    let content_state = Arc::new(RwLock::new(ContentState::default()));
    content::spawn_loaders(&source, &content_state);

    let state = AppState {
        content: content_state,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
