//! Line parser for the tab-separated activity log.
//!
//! Each record is six tab-separated fields:
//!
//! ```text
//! 2023-08-05 13:25:58,547	name@provider.tld	939	279	19	user place
//! ```
//!
//! Ingestion is permissive. A numeric field that does not parse becomes `0`
//! and the line is kept. A line with fewer than six fields, or with an
//! empty user field, is dropped and counted. Neither case aborts the load.

use crate::error::LineError;
use crate::event::{Action, Event};

const FIELD_COUNT: usize = 6;

/// An event together with how many of its numeric fields fell back to `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub event: Event,
    pub degraded_fields: usize,
}

/// Parses one log line into an [`Event`].
///
/// Fields past the sixth are ignored. A trailing `\r` is stripped so
/// CRLF logs parse the same as LF logs.
///
/// # Errors
///
/// Returns [`LineError::MissingFields`] if the line has fewer than six
/// tab-separated fields, or [`LineError::EmptyUser`] if the user field is
/// empty.
pub fn parse_line(line: &str) -> Result<ParsedLine, LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.splitn(FIELD_COUNT + 1, '\t').collect();
    if fields.len() < FIELD_COUNT {
        return Err(LineError::MissingFields {
            found: fields.len(),
        });
    }
    if fields[1].is_empty() {
        return Err(LineError::EmptyUser);
    }

    let mut degraded_fields = 0;
    let mut int_field = |raw: &str| -> i64 {
        raw.parse().unwrap_or_else(|_| {
            degraded_fields += 1;
            0
        })
    };

    let x = int_field(fields[2]);
    let y = int_field(fields[3]);
    let color = int_field(fields[4]);

    Ok(ParsedLine {
        event: Event {
            timestamp: fields[0].to_string(),
            user: fields[1].to_string(),
            x,
            y,
            color,
            action: Action::from(fields[5]),
        },
        degraded_fields,
    })
}

/// Counters describing one pass over a log source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Events kept.
    pub events: usize,
    /// Empty or whitespace-only lines skipped.
    pub blank: usize,
    /// Lines dropped for having too few fields or no user.
    pub dropped: usize,
    /// Numeric fields that failed to parse and were stored as `0`.
    pub degraded_fields: usize,
}

/// Incremental log parser that accumulates events and a [`LoadReport`].
#[derive(Debug, Default)]
pub struct LogParser {
    events: Vec<Event>,
    report: LoadReport,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line (without its `\n`) to the parser.
    pub fn push(&mut self, line: &str) {
        self.report.lines += 1;
        let line_no = self.report.lines;

        if line.trim().is_empty() {
            self.report.blank += 1;
            return;
        }

        match parse_line(line) {
            Ok(parsed) => {
                if parsed.degraded_fields > 0 {
                    tracing::debug!(
                        line = line_no,
                        fields = parsed.degraded_fields,
                        "non-numeric field stored as 0"
                    );
                    self.report.degraded_fields += parsed.degraded_fields;
                }
                self.events.push(parsed.event);
                self.report.events += 1;
            }
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "dropping log line");
                self.report.dropped += 1;
            }
        }
    }

    /// Finishes parsing and returns the events in input order.
    pub fn finish(self) -> (Vec<Event>, LoadReport) {
        (self.events, self.report)
    }
}

/// Parses every line of an in-memory log.
pub fn parse_lines<I, S>(lines: I) -> (Vec<Event>, LoadReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LogParser::new();
    for line in lines {
        parser.push(line.as_ref());
    }
    parser.finish()
}
