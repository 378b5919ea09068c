//! The immutable, load-once event store.
//!
//! [`EventStore`] owns every parsed event in log order, plus two position
//! indexes built during load: one keyed by pixel and one keyed by user.
//! Index entries are ascending log positions, so walking an index yields
//! events in log order. Nothing is mutable after construction; the store is
//! shared between request handlers behind an `Arc` with no locking.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::StoreError;
use crate::event::Event;
use crate::parser::{LoadReport, LogParser};

/// The full activity log held in memory.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    by_pixel: HashMap<(i64, i64), Vec<usize>>,
    by_user: HashMap<String, Vec<usize>>,
    /// Users in order of their first event.
    users_in_order: Vec<String>,
}

impl EventStore {
    /// Builds a store from events already in log order.
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut by_pixel: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        let mut by_user: HashMap<String, Vec<usize>> = HashMap::new();
        let mut users_in_order = Vec::new();

        for (pos, event) in events.iter().enumerate() {
            by_pixel.entry((event.x, event.y)).or_default().push(pos);
            match by_user.get_mut(&event.user) {
                Some(positions) => positions.push(pos),
                None => {
                    by_user.insert(event.user.clone(), vec![pos]);
                    users_in_order.push(event.user.clone());
                }
            }
        }

        Self {
            events,
            by_pixel,
            by_user,
            users_in_order,
        }
    }

    /// Reads and parses a whole log source.
    ///
    /// Lines are decoded lossily, so invalid UTF-8 never fails the load.
    /// Malformed lines are handled per [`LogParser`] and reported in the
    /// returned [`LoadReport`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if reading from `reader` fails.
    pub fn load<R: BufRead>(mut reader: R) -> Result<(Self, LoadReport), StoreError> {
        let mut parser = LogParser::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            parser.push(&String::from_utf8_lossy(&buf));
        }

        let (events, report) = parser.finish();
        Ok((Self::from_events(events), report))
    }

    /// Opens and loads the log file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be opened or read.
    pub fn open(path: impl AsRef<Path>) -> Result<(Self, LoadReport), StoreError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let (store, report) = Self::load(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            lines = report.lines,
            events = report.events,
            dropped = report.dropped,
            degraded_fields = report.degraded_fields,
            users = store.user_count(),
            pixels = store.pixel_count(),
            "loaded activity log"
        );
        Ok((store, report))
    }

    /// Every event in log order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of distinct users in the log.
    pub fn user_count(&self) -> usize {
        self.users_in_order.len()
    }

    /// Number of distinct pixels touched by at least one event.
    pub fn pixel_count(&self) -> usize {
        self.by_pixel.len()
    }

    /// Events at `(x, y)` in log order.
    pub fn pixel_events(&self, x: i64, y: i64) -> impl Iterator<Item = &Event> + '_ {
        self.positions(self.by_pixel.get(&(x, y)))
    }

    /// Events by `user` in log order.
    pub fn user_events<'a>(&'a self, user: &str) -> impl Iterator<Item = &'a Event> + 'a {
        self.positions(self.by_user.get(user))
    }

    /// Distinct users in order of first appearance, with their event counts.
    pub(crate) fn user_counts(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.users_in_order.iter().map(move |user| {
            let count = self.by_user.get(user).map_or(0, Vec::len);
            (user.as_str(), count)
        })
    }

    fn positions<'a>(
        &'a self,
        positions: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        positions
            .into_iter()
            .flatten()
            .map(move |&pos| &self.events[pos])
    }
}
