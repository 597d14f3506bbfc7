//! Calculation history tracking.
//!
//! Provides an immutable, ordered log of completed binary evaluations,
//! following functional programming principles. Only successful
//! evaluations are recorded; single-value functions and failed
//! evaluations leave the log untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of one completed binary evaluation.
///
/// Entries are immutable values describing the operands, operator, and
/// formatted result of an evaluation at a specific point in time.
///
/// # Example
///
/// ```rust
/// use tally::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("5 + 3", "8");
/// assert_eq!(entry.expression, "5 + 3");
/// assert_eq!(entry.result, "8");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for presentation-layer list rendering
    pub id: Uuid,
    /// The operands-and-operator description, e.g. `"5 + 3"`
    pub expression: String,
    /// The formatted result, e.g. `"8"`
    pub result: String,
    /// When the evaluation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with a fresh id and the current time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered log of completed evaluations.
///
/// History is immutable - the `record` method returns a new log with the
/// entry appended. Entries are ordered by occurrence; presentation layers
/// typically show the newest first.
///
/// # Example
///
/// ```rust
/// use tally::core::{History, HistoryEntry};
///
/// let history = History::new();
/// let history = history.record(HistoryEntry::new("5 + 3", "8"));
/// let history = history.record(HistoryEntry::new("8 + 2", "10"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().result, "10");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log
    /// but returns a new one with the entry appended.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get all entries in order of occurrence.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Get the most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the log has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
