//! Integration tests: loading from disk, reproducibility across loads, and
//! concurrent reads over a shared store.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use pixlog_store::{
    leaderboard, pixel_history, pixel_stats, user_history, user_stats, EventStore, StoreError,
};

/// Writes a synthetic log with overlapping users and pixels to a temp file.
fn write_log() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    for i in 0..500u32 {
        let user = format!("user{}@example.org", i % 17);
        let action = if i % 7 == 0 { "user undo" } else { "user place" };
        writeln!(
            file,
            "2023-08-05 13:25:{:02},{:03}\t{}\t{}\t{}\t{}\t{}",
            i % 60,
            i,
            user,
            i % 9,
            i % 4,
            i % 32,
            action
        )
        .expect("should write line");
    }
    // A line with too few fields and one with a bad number.
    writeln!(file, "garbage").expect("should write line");
    writeln!(file, "t\tuser0@example.org\tnan\t0\t3\tuser place").expect("should write line");
    file.flush().expect("should flush");
    file
}

#[test]
fn open_reads_log_from_disk() {
    let file = write_log();
    let (store, report) = EventStore::open(file.path()).expect("open should succeed");

    assert_eq!(report.lines, 502);
    assert_eq!(report.dropped, 1);
    assert_eq!(report.degraded_fields, 1);
    assert_eq!(store.len(), 501);
    assert_eq!(store.user_count(), 17);
}

#[test]
fn open_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let result = EventStore::open(dir.path().join("absent.log"));
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn independent_loads_answer_identically() {
    let file = write_log();
    let (a, _) = EventStore::open(file.path()).expect("first load");
    let (b, _) = EventStore::open(file.path()).expect("second load");

    assert_eq!(leaderboard(&a), leaderboard(&b));
    for x in 0..10 {
        for y in 0..5 {
            assert_eq!(pixel_history(&a, x, y), pixel_history(&b, x, y));
            assert_eq!(pixel_stats(&a, x, y), pixel_stats(&b, x, y));
        }
    }
    for i in 0..18 {
        let user = format!("user{i}@example.org");
        assert_eq!(user_history(&a, &user), user_history(&b, &user));
        assert_eq!(user_stats(&a, &user), user_stats(&b, &user));
    }
}

#[test]
fn concurrent_queries_match_single_threaded_results() {
    let file = write_log();
    let (store, _) = EventStore::open(file.path()).expect("open should succeed");
    let store = Arc::new(store);

    let expected_board = leaderboard(&store);
    let expected_stats = pixel_stats(&store, 3, 1);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut results = Vec::new();
                for _ in 0..20 {
                    results.push((leaderboard(&store), pixel_stats(&store, 3, 1)));
                }
                results
            })
        })
        .collect();

    for handle in handles {
        for (board, stats) in handle.join().expect("worker should not panic") {
            assert_eq!(board, expected_board);
            assert_eq!(stats, expected_stats);
        }
    }
}
