//! Read-only queries over an [`EventStore`].
//!
//! Every function here is a pure function of the store and its arguments.
//! Results are recomputed on each call; nothing is cached and nothing is
//! written, so any number of threads may call these concurrently on a
//! shared store.

use std::collections::HashMap;

use pixlog_types::{color_name, History, LeaderboardEntry, PixelStats, UserStats};

use crate::event::Event;
use crate::store::EventStore;

/// Palette name of the floored mean of `sum / count`.
///
/// Returns `None` when `count` is zero.
fn mean_color_name(sum: i128, count: usize) -> Option<&'static str> {
    if count == 0 {
        return None;
    }
    // The mean of i64 values always fits in i64.
    let mean = sum.div_euclid(count as i128) as i64;
    Some(color_name(mean))
}

/// Every event at `(x, y)`, in log order.
pub fn pixel_history(store: &EventStore, x: i64, y: i64) -> History {
    History::new(store.pixel_events(x, y).map(Event::view).collect())
}

/// Aggregate statistics for the pixel at `(x, y)`.
///
/// The favourite color is the palette entry at the floored mean of the raw
/// color indices. The most active user is the first user, scanning in log
/// order, to reach the highest per-pixel event count.
pub fn pixel_stats(store: &EventStore, x: i64, y: i64) -> PixelStats {
    let mut count = 0usize;
    let mut color_sum: i128 = 0;
    let mut per_user: HashMap<&str, usize> = HashMap::new();
    let mut leader: Option<(&str, usize)> = None;

    for event in store.pixel_events(x, y) {
        count += 1;
        color_sum += i128::from(event.color);

        let n = per_user.entry(event.user.as_str()).or_insert(0);
        *n += 1;
        if leader.map_or(true, |(_, best)| *n > best) {
            leader = Some((event.user.as_str(), *n));
        }
    }

    let (Some(favourite), Some((most_active, _))) = (mean_color_name(color_sum, count), leader)
    else {
        return PixelStats::virgin(x, y);
    };

    PixelStats {
        x,
        y,
        time_changed: count,
        favourite_color: favourite.to_string(),
        most_active_user: most_active.to_string(),
        virgin: false,
    }
}

/// Every event by `user`, placements and undos alike, in log order.
pub fn user_history(store: &EventStore, user: &str) -> History {
    History::new(store.user_events(user).map(Event::view).collect())
}

/// Aggregate statistics for `user`.
///
/// Any action that is not an undo counts as a placement. The favourite
/// color averages over all of the user's events. A user with no events gets
/// [`UserStats::unknown`] rather than an error.
pub fn user_stats(store: &EventStore, user: &str) -> UserStats {
    let mut placed = 0u64;
    let mut undone = 0u64;
    let mut count = 0usize;
    let mut color_sum: i128 = 0;

    for event in store.user_events(user) {
        count += 1;
        color_sum += i128::from(event.color);
        if event.action.is_undo() {
            undone += 1;
        } else {
            placed += 1;
        }
    }

    let Some(favourite) = mean_color_name(color_sum, count) else {
        return UserStats::unknown(user);
    };

    UserStats {
        user: user.to_string(),
        placed,
        undone,
        total: placed as i64 - undone as i64,
        favourite_color: favourite.to_string(),
        rank: rank_of(store, user),
        found: true,
    }
}

/// Every user ranked by total event count, highest first.
///
/// Undos count toward the total. Users with equal counts keep the order of
/// their first event in the log, so the ranking is identical across calls
/// and across stores loaded from the same log.
pub fn leaderboard(store: &EventStore) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<(&str, usize)> = store.user_counts().collect();
    // Stable sort: ties stay in first-appearance order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .map(|(user, count)| LeaderboardEntry {
            user: user.to_string(),
            event_count: count as u64,
        })
        .collect()
}

/// The first `limit` rows of [`leaderboard`], or all rows if there are fewer.
pub fn top_users(store: &EventStore, limit: usize) -> Vec<LeaderboardEntry> {
    let mut board = leaderboard(store);
    board.truncate(limit);
    board
}

/// 1-based leaderboard position of `user`, or 0 if the user has no events.
pub fn rank_of(store: &EventStore, user: &str) -> usize {
    leaderboard(store)
        .iter()
        .position(|entry| entry.user == user)
        .map_or(0, |i| i + 1)
}
