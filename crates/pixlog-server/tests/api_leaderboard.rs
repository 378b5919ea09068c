//! HTTP tests for the leaderboard endpoint.

mod common;

use axum::http::StatusCode;
use common::{get_json, test_app, SAMPLE_LOG};

/// Twelve users; `userN` has N + 1 events.
fn busy_log() -> Vec<String> {
    let mut lines = Vec::new();
    for n in 0..12 {
        for i in 0..=n {
            lines.push(format!("t{i}\tuser{n}\t{i}\t{n}\t{}\tuser place", i % 32));
        }
    }
    lines
}

#[tokio::test]
async fn leaderboard_defaults_to_ten_rows() {
    let lines = busy_log();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let (status, json) = get_json(test_app(&refs), "/leaderboard").await;

    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["user"], "user11");
    assert_eq!(rows[0]["eventCount"], 12);
    assert_eq!(rows[9]["user"], "user2");
}

#[tokio::test]
async fn leaderboard_returns_everyone_when_fewer_than_limit() {
    let (status, json) = get_json(test_app(SAMPLE_LOG), "/leaderboard").await;

    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Tie on two events each: first appearance wins.
    assert_eq!(rows[0]["user"], "alice");
    assert_eq!(rows[1]["user"], "bob");
    assert_eq!(rows[1]["eventCount"], 2);
}

#[tokio::test]
async fn leaderboard_honours_limit_parameter() {
    let lines = busy_log();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    let (status, json) = get_json(test_app(&refs), "/leaderboard?limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 3);

    let (status, json) = get_json(test_app(&refs), "/leaderboard?limit=50").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn leaderboard_limit_zero_is_raised_to_one_row() {
    let (status, json) = get_json(test_app(SAMPLE_LOG), "/leaderboard?limit=0").await;

    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user"], "alice");
}

#[tokio::test]
async fn leaderboard_rejects_invalid_limit() {
    let (status, json) = get_json(test_app(SAMPLE_LOG), "/leaderboard?limit=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn leaderboard_on_empty_store_is_empty() {
    let (status, json) = get_json(test_app(&[]), "/leaderboard").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}
