//! Append-only match log.
//!
//! The log describes state transitions for display. Game logic never reads
//! it back. Entries are stored oldest first in a persistent vector, so a
//! snapshot of the state keeps its own view of the log.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Category of a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogKind {
    /// Match start, skipped turns, match end.
    Info,
    /// A player put cards at the waterhole.
    Action,
    /// A pile was scared away.
    Capture,
}

/// One timestamped log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub kind: LogKind,
    pub message: String,
    /// Turn number the entry was written on.
    pub turn: u32,
    /// Wall-clock time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

/// Ordered log of a match, oldest entry first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchLog {
    entries: Vector<LogEntry>,
}

impl MatchLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current time.
    pub fn push(&mut self, kind: LogKind, turn: u32, message: impl Into<String>) {
        self.entries.push_back(LogEntry {
            kind,
            message: message.into(),
            turn,
            timestamp_ms: unix_millis(),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries of one kind, oldest first.
    pub fn of_kind(&self, kind: LogKind) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}

/// Milliseconds since the Unix epoch, saturating to 0 on a skewed clock.
#[must_use]
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
