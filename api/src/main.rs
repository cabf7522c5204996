//! Deck API Server
//!
//! Serves French playing-card decks over HTTP: create a deck (optionally
//! shuffled, optionally from a custom set of cards), open it, and draw cards
//! from the top.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryDeckStore, ThreadRngShuffler};
use app::DeckService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub deck_service: Arc<DeckService<InMemoryDeckStore, ThreadRngShuffler>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let mut store = InMemoryDeckStore::new();
        if let Some(ttl) = config.deck_ttl() {
            store = store.with_ttl(ttl);
        }

        let deck_service = DeckService::new(Arc::new(store), Arc::new(ThreadRngShuffler))
            .with_max_draw_attempts(config.draw_max_attempts);

        Self {
            deck_service: Arc::new(deck_service),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/decks", post(handlers::create_deck))
        .route("/v1/decks/:id", get(handlers::open_deck))
        .route("/v1/decks/:id/draw", post(handlers::draw_cards))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,deck_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting deck API...");

    let config = Config::from_env();
    if let Some(ttl) = config.deck_ttl_secs {
        tracing::info!(ttl_secs = ttl, "Decks expire after creation");
    }

    let app = router(AppState::from_config(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Received shutdown signal");
}
