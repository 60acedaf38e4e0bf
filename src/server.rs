//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use hue_engine::ReferencePalette;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{load_reference_palette, PaletteOrigin, PaletteSourceError};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub palette: Arc<ReferencePalette>,
    pub origin: Arc<PaletteOrigin>,
}

impl AppState {
    pub fn new(config: AppConfig, palette: Arc<ReferencePalette>, origin: PaletteOrigin) -> Self {
        Self {
            config: Arc::new(config),
            palette,
            origin: Arc::new(origin),
        }
    }
}

/// Create application state, resolving the reference palette once.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, PaletteSourceError> {
    let (palette, origin) = load_reference_palette(&config.palette).await?;
    Ok(AppState::new(config, palette, origin))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.server.max_upload_bytes;

    Router::new()
        .route("/api/extract", post(api::handle_extract))
        .route("/api/palette", get(api::handle_palette))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
}
