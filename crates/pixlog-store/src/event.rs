//! Action kinds and the event record held by the store.

use pixlog_types::{color_name, EventView};

/// Literal action string the log uses for a placement.
pub const PLACE_ACTION: &str = "user place";
/// Literal action string the log uses for an undo.
pub const UNDO_ACTION: &str = "user undo";

/// What a log record did to its pixel.
///
/// Unrecognised action strings are kept verbatim in [`Action::Other`] so
/// they can be echoed back unchanged. Aggregations branch on
/// [`Action::is_undo`] only, which makes `Other` count as a placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Place,
    Undo,
    Other(String),
}

impl Action {
    /// Returns the action string as it appears in the log.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Place => PLACE_ACTION,
            Self::Undo => UNDO_ACTION,
            Self::Other(raw) => raw,
        }
    }

    pub fn is_undo(&self) -> bool {
        matches!(self, Self::Undo)
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        match s {
            PLACE_ACTION => Self::Place,
            UNDO_ACTION => Self::Undo,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Timestamp in the log's own format. Never parsed; ordering is log order.
    pub timestamp: String,
    pub user: String,
    pub x: i64,
    pub y: i64,
    /// Raw palette index. May lie outside the palette.
    pub color: i64,
    pub action: Action,
}

impl Event {
    /// Returns the client-facing view of this event.
    pub fn view(&self) -> EventView {
        EventView {
            time: self.timestamp.clone(),
            user: self.user.clone(),
            x: self.x,
            y: self.y,
            color: color_name(self.color).to_string(),
            action: self.action.as_str().to_string(),
        }
    }
}
