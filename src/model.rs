//! Core data types for the event log.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Unique identifier for a log entry.
///
/// Identifiers are positive integers assigned at append time as
/// `max(existing ids) + 1`. They are unique and strictly increasing in
/// insertion order; gaps can appear after a partial failure, duplicates
/// never do.
pub type EntryId = u64;

/// A single persisted measurement or event record.
///
/// Entries are immutable once appended. `datetime` is the caller-supplied
/// event time, normalized to UTC; `created_at` is the server-assigned
/// ingestion time, never caller-supplied.
///
/// # Value Semantics
///
/// `value` is stored as text regardless of whether the producer sent a
/// string, number, or boolean. Consumers that need numeric semantics
/// should use [`LogEntry::numeric_value`], which attempts coercion and
/// falls back to `None` for non-numeric text.
///
/// # Example
///
/// ```ignore
/// let page = log.query(QueryParams::default()).await?;
/// for entry in &page.entries {
///     println!(
///         "#{} {}={} from {}",
///         entry.id, entry.name, entry.value, entry.source
///     );
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Unique identifier, strictly increasing in insertion order.
    pub id: EntryId,

    /// Logical category of the write, e.g. a batch or operation tag.
    /// Optional; empty string when the producer supplied none.
    pub transaction: String,

    /// Caller-supplied event time, normalized to UTC.
    pub datetime: DateTime<Utc>,

    /// Measurement or event name. Required, never empty.
    pub name: String,

    /// The recorded value, rendered to text.
    pub value: String,

    /// Producer identifier. Required, never empty.
    pub source: String,

    /// Server-assigned ingestion time. Audit only, never used for
    /// business filtering.
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    /// Attempts to interpret the stored value as a number.
    ///
    /// Returns `None` when the text does not parse as a float, leaving the
    /// raw string available via the `value` field.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }
}
