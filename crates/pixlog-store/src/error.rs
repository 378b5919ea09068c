//! Error types for log ingestion.

/// Reasons a single log line could not become an event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The line has fewer than the six tab-separated fields a record needs.
    #[error("malformed log line: expected 6 tab-separated fields, found {found}")]
    MissingFields {
        /// Number of fields actually present.
        found: usize,
    },

    /// The user field is empty.
    #[error("malformed log line: empty user field")]
    EmptyUser,
}

/// Errors that can occur while loading the event store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The log source could not be read.
    #[error("failed to read activity log: {0}")]
    Io(#[from] std::io::Error),
}
