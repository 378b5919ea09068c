//! In-memory event store and query engine for the canvas activity log.
//!
//! The log is an append-only, tab-separated record of pixel placements and
//! undos. It is parsed once at startup into an immutable [`EventStore`];
//! every query after that is a read-only scan over the store's indexes.
//!
//! # Queries
//!
//! | Function | Result |
//! |----------|--------|
//! | [`pixel_history`] | every event at a pixel, in log order |
//! | [`pixel_stats`] | change count, favourite color, most active user |
//! | [`user_history`] | every event by a user, in log order |
//! | [`user_stats`] | placed / undone / net counts, favourite color, rank |
//! | [`leaderboard`] | all users ranked by total event count |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pixlog_store::{pixel_stats, EventStore};
//!
//! let (store, report) = EventStore::open("pixels.log")?;
//! let stats = pixel_stats(&store, 10, 20);
//! ```

mod error;
mod event;
mod parser;
mod query;
mod store;

pub use error::{LineError, StoreError};
pub use event::{Action, Event, PLACE_ACTION, UNDO_ACTION};
pub use parser::{parse_line, parse_lines, LoadReport, LogParser, ParsedLine};
pub use query::{
    leaderboard, pixel_history, pixel_stats, rank_of, top_users, user_history, user_stats,
};
pub use store::EventStore;
