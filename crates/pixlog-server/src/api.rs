//! Query API handlers.
//!
//! Provides:
//! - `GET /pixel/{x}/{y}`: every event at a pixel
//! - `GET /pixel/{x}/{y}/stats`: aggregate pixel statistics
//! - `GET /user/{user}`: every event by a user
//! - `GET /user/{user}/stats`: aggregate user statistics
//! - `GET /leaderboard`: most active users
//!
//! Empty results are `200` responses with `found: false` (or `virgin: true`
//! for pixel stats). Errors are reserved for malformed requests and
//! internal failures.

use crate::AppState;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pixlog_store::{
    pixel_history, pixel_stats, top_users, user_history, user_stats, EventStore,
};
use pixlog_types::{History, LeaderboardEntry, PixelStats, UserStats};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Runs a query against the shared store on the blocking pool.
async fn run_query<T, F>(state: &AppState, query: F) -> Result<T, ApiError>
where
    F: FnOnce(&EventStore) -> T + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || query(&store))
        .await
        .map_err(|e| ApiError::InternalServerError(format!("task join error: {}", e)))
}

fn parse_coordinate(name: &str, raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("{} must be an integer, got {:?}", name, raw)))
}

fn parse_pixel(raw: &(String, String)) -> Result<(i64, i64), ApiError> {
    Ok((parse_coordinate("x", &raw.0)?, parse_coordinate("y", &raw.1)?))
}

/// Handler for `GET /pixel/{x}/{y}`.
pub async fn get_pixel_history_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(raw): Path<(String, String)>,
) -> Result<Json<History>, ApiError> {
    let (x, y) = parse_pixel(&raw)?;
    let history = run_query(&state, move |store| pixel_history(store, x, y)).await?;
    tracing::debug!(x, y, count = history.count, "pixel history");
    Ok(Json(history))
}

/// Handler for `GET /pixel/{x}/{y}/stats`.
pub async fn get_pixel_stats_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(raw): Path<(String, String)>,
) -> Result<Json<PixelStats>, ApiError> {
    let (x, y) = parse_pixel(&raw)?;
    let stats = run_query(&state, move |store| pixel_stats(store, x, y)).await?;
    Ok(Json(stats))
}

/// Handler for `GET /user/{user}`.
pub async fn get_user_history_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(user): Path<String>,
) -> Result<Json<History>, ApiError> {
    let history = run_query(&state, move |store| user_history(store, &user)).await?;
    Ok(Json(history))
}

/// Handler for `GET /user/{user}/stats`.
///
/// A user absent from the log gets zeroed stats with `found: false` and
/// `rank: 0`.
pub async fn get_user_stats_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(user): Path<String>,
) -> Result<Json<UserStats>, ApiError> {
    let stats = run_query(&state, move |store| user_stats(store, &user)).await?;
    Ok(Json(stats))
}

/// Query parameters for `GET /leaderboard`.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Number of rows to return. Defaults to `leaderboard.default_limit`.
    pub limit: Option<String>,
}

/// Handler for `GET /leaderboard`.
///
/// Returns at most `limit` rows, fewer if the log has fewer users. The
/// requested `limit` is clamped to `1..=leaderboard.max_limit`, so
/// `limit=0` returns one row rather than none.
pub async fn get_leaderboard_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let requested = match params.limit.as_deref() {
        Some(raw) => Some(raw.parse::<usize>().map_err(|_| {
            ApiError::BadRequest(format!(
                "limit must be a non-negative integer, got {:?}",
                raw
            ))
        })?),
        None => None,
    };
    let limit = state.leaderboard.resolve(requested);

    let board = run_query(&state, move |store| top_users(store, limit)).await?;
    Ok(Json(board))
}
