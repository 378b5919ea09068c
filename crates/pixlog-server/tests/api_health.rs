mod common;

use axum::http::StatusCode;
use common::{get_json, test_app, SAMPLE_LOG};

#[tokio::test]
async fn health_check_reports_loaded_store() {
    let (status, json) = get_json(test_app(SAMPLE_LOG), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["events"], 4);
    assert_eq!(json["users"], 2);
}

#[tokio::test]
async fn health_check_on_empty_store() {
    let (status, json) = get_json(test_app(&[]), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["events"], 0);
    assert_eq!(json["users"], 0);
}
