pub mod health;
pub mod page;
pub mod send;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{GeminiConfig, ServerConfig};

pub struct InnerAppState {
    /// Loaded once at startup and never written.
    pub gemini: GeminiConfig,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(config: &ServerConfig) -> Router {
    let state = Arc::new(InnerAppState {
        gemini: config.gemini(),
    });

    let router = Router::new()
        .merge(page::routes())
        .merge(send::routes())
        .merge(health::routes())
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http());

    let router = if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}
