//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pixlog_server::{app, config::LeaderboardConfig, AppState};
use pixlog_store::{parse_lines, EventStore};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

/// The three-event log from the pixel stats worked example, plus a fourth
/// event elsewhere so pixel filtering is exercised.
pub const SAMPLE_LOG: &[&str] = &[
    "t1\talice\t10\t20\t2\tuser place",
    "t2\talice\t10\t20\t4\tuser place",
    "t3\tbob\t10\t20\t2\tuser place",
    "t4\tbob\t11\t20\t0\tuser undo",
];

/// Builds a router over a store parsed from `lines`.
pub fn test_app(lines: &[&str]) -> Router {
    let (events, _) = parse_lines(lines);
    app(AppState::new(
        EventStore::from_events(events),
        LeaderboardConfig::default(),
    ))
}

/// Issues a GET and decodes the JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}
