//! HTTP serving layer for the pixlog canvas analytics service.

pub mod api;
pub mod config;

use axum::{routing::get, Extension, Json, Router};
use config::LeaderboardConfig;
use pixlog_store::EventStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
///
/// The store is immutable after startup, so handlers share it without any
/// lock.
#[derive(Clone)]
pub struct AppState {
    /// The activity log, loaded once at startup.
    pub store: Arc<EventStore>,
    /// Default and maximum leaderboard sizes.
    pub leaderboard: LeaderboardConfig,
}

impl AppState {
    pub fn new(store: EventStore, leaderboard: LeaderboardConfig) -> Self {
        Self {
            store: Arc::new(store),
            leaderboard,
        }
    }
}

/// Health check handler.
async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "events": state.store.len(),
        "users": state.store.user_count(),
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/pixel/{x}/{y}", get(api::get_pixel_history_handler))
        .route("/pixel/{x}/{y}/stats", get(api::get_pixel_stats_handler))
        .route("/user/{user}", get(api::get_user_history_handler))
        .route("/user/{user}/stats", get(api::get_user_stats_handler))
        .route("/leaderboard", get(api::get_leaderboard_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
