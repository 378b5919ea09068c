//! Shared types for the pixlog canvas analytics service.
//!
//! This crate holds the color palette and the serialisable result records
//! returned by the query engine. Both the store and the HTTP layer depend
//! on it, so the records here define the wire shape of every response.

mod color;

pub use color::{color_name, Color, ParseColorError, PALETTE_SIZE, UNKNOWN_COLOR};

use serde::{Deserialize, Serialize};

/// A single log record as presented to clients, with the color index
/// resolved to its palette name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    /// Timestamp exactly as it appeared in the log.
    pub time: String,
    /// The acting user.
    pub user: String,
    pub x: i64,
    pub y: i64,
    /// Palette name, or [`UNKNOWN_COLOR`] for out-of-range indices.
    pub color: String,
    /// The action string exactly as it appeared in the log.
    pub action: String,
}

/// An ordered list of events for one pixel or one user.
///
/// `found` is `false` exactly when `events` is empty. Zero matches is a
/// valid result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    pub found: bool,
    pub count: usize,
    /// Matching events in log order.
    pub events: Vec<EventView>,
}

impl History {
    /// Wraps a list of events, deriving `found` and `count` from it.
    pub fn new(events: Vec<EventView>) -> Self {
        Self {
            found: !events.is_empty(),
            count: events.len(),
            events,
        }
    }
}

/// Aggregate statistics for a single pixel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelStats {
    pub x: i64,
    pub y: i64,
    /// Number of events recorded at this pixel.
    pub time_changed: usize,
    /// Palette name of the floored mean color index; empty for a virgin pixel.
    pub favourite_color: String,
    /// User with the most events at this pixel; empty for a virgin pixel.
    pub most_active_user: String,
    /// `true` when no event has ever touched this pixel.
    pub virgin: bool,
}

impl PixelStats {
    /// Stats for a pixel with no recorded events.
    pub fn virgin(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            time_changed: 0,
            favourite_color: String::new(),
            most_active_user: String::new(),
            virgin: true,
        }
    }
}

/// Aggregate statistics for a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub user: String,
    /// Number of placement events (anything that is not an undo).
    pub placed: u64,
    /// Number of undo events.
    pub undone: u64,
    /// `placed - undone`. Negative when a user undid more than they placed.
    pub total: i64,
    /// Palette name of the floored mean color index over all the user's
    /// events; empty when the user has none.
    pub favourite_color: String,
    /// 1-based leaderboard position, or 0 when the user has no events.
    pub rank: usize,
    /// `false` when the user does not appear in the log.
    pub found: bool,
}

impl UserStats {
    /// Stats for a user that never appears in the log.
    pub fn unknown(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            placed: 0,
            undone: 0,
            total: 0,
            favourite_color: String::new(),
            rank: 0,
            found: false,
        }
    }
}

/// One row of the activity leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user: String,
    /// Total events by this user, undos included.
    pub event_count: u64,
}
