mod config;
mod corpus;
mod errors;
mod models;
mod roadmap;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::corpus::source::{self, DatasetSource};
use crate::corpus::CorpusStore;
use crate::roadmap::curated::CuratedCatalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathforge API v{}", env!("CARGO_PKG_VERSION"));

    // One-time corpus load. Malformed data degrades; it never aborts startup.
    let resource_sources: Vec<Box<dyn DatasetSource>> = config
        .resource_sources
        .iter()
        .map(|location| source::source_for(location))
        .collect();
    let careers_source = source::source_for(&config.careers_source);
    let corpus = CorpusStore::load(&resource_sources, careers_source.as_ref()).await;
    if corpus.is_empty() {
        warn!("corpus is empty; serving synthesized roadmaps without resources");
    }

    let curated = CuratedCatalog::builtin();
    info!(
        curated = curated.len(),
        resources = corpus.stats().resources,
        careers = corpus.stats().careers,
        indexed_tokens = corpus.stats().indexed_tokens,
        "roadmap engine ready"
    );

    let state = AppState {
        corpus: Arc::new(corpus),
        curated: Arc::new(curated),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
