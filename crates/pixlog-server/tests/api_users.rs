//! HTTP tests for the user history and user stats endpoints.

mod common;

use axum::http::StatusCode;
use common::{get_json, test_app, SAMPLE_LOG};

#[tokio::test]
async fn user_history_includes_undos() {
    let (status, json) = get_json(test_app(SAMPLE_LOG), "/user/bob").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], true);
    assert_eq!(json["count"], 2);
    assert_eq!(json["events"][0]["action"], "user place");
    assert_eq!(json["events"][1]["action"], "user undo");
    assert_eq!(json["events"][1]["color"], "Black");
}

#[tokio::test]
async fn user_history_for_unknown_user_is_empty() {
    let (status, json) = get_json(test_app(SAMPLE_LOG), "/user/carol").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], false);
    assert_eq!(json["events"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn user_history_decodes_percent_encoded_names() {
    let app = test_app(&["t1\tname@provider.tld\t1\t1\t1\tuser place"]);
    let (status, json) = get_json(app, "/user/name%40provider.tld").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["events"][0]["user"], "name@provider.tld");
}

#[tokio::test]
async fn user_stats_counts_placements_and_undos() {
    let app = test_app(&[
        "t1\talice\t0\t0\t2\tuser place",
        "t2\talice\t1\t0\t4\tuser place",
        "t3\talice\t1\t0\t0\tuser undo",
        "t4\tbob\t5\t5\t9\tuser place",
    ]);
    let (status, json) = get_json(app, "/user/alice/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"], "alice");
    assert_eq!(json["placed"], 2);
    assert_eq!(json["undone"], 1);
    assert_eq!(json["total"], 1);
    assert_eq!(json["favouriteColor"], "Deep Grey");
    assert_eq!(json["rank"], 1);
    assert_eq!(json["found"], true);
}

#[tokio::test]
async fn user_stats_rank_reflects_leaderboard_position() {
    let (status, json) = get_json(test_app(SAMPLE_LOG), "/user/bob/stats").await;

    assert_eq!(status, StatusCode::OK);
    // alice and bob tie on two events; alice appears first.
    assert_eq!(json["rank"], 2);
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn user_stats_for_absent_user_is_zeroed_not_an_error() {
    let (status, json) = get_json(test_app(SAMPLE_LOG), "/user/carol/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"], "carol");
    assert_eq!(json["placed"], 0);
    assert_eq!(json["undone"], 0);
    assert_eq!(json["total"], 0);
    assert_eq!(json["favouriteColor"], "");
    assert_eq!(json["rank"], 0);
    assert_eq!(json["found"], false);
}
