//! Identifier allocation for appended entries.

use crate::model::{EntryId, LogEntry};

/// Computes the identifier for the next appended entry.
///
/// Returns 1 for an empty log, otherwise `max(existing ids) + 1`. The
/// slice must be a fully loaded snapshot taken under the exclusive lock:
/// allocating from a partial or stale view can hand out a duplicate.
pub fn next_id(entries: &[LogEntry]) -> EntryId {
    entries
        .iter()
        .map(|entry| entry.id)
        .max()
        .map_or(1, |max| max + 1)
}
