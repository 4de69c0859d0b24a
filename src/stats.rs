//! Distinct-value and count summaries over a loaded snapshot.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::LogEntry;

/// Summary statistics over the whole log. Filters never apply here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub total_entries: usize,
    pub unique_sources: usize,
    pub unique_names: usize,
    pub sources: Vec<String>,
    pub names: Vec<String>,
}

/// Aggregates counts and distinct value lists over all entries.
///
/// The `sources` and `names` lists are in first-occurrence order, which
/// is deterministic for a given file. An empty log yields zero counts and
/// empty lists, never an error.
pub fn aggregate(entries: &[LogEntry]) -> LogStats {
    let mut sources = Vec::new();
    let mut names = Vec::new();
    let mut seen_sources = HashSet::new();
    let mut seen_names = HashSet::new();

    for entry in entries {
        if seen_sources.insert(entry.source.as_str()) {
            sources.push(entry.source.clone());
        }
        if seen_names.insert(entry.name.as_str()) {
            names.push(entry.name.clone());
        }
    }

    LogStats {
        total_entries: entries.len(),
        unique_sources: sources.len(),
        unique_names: names.len(),
        sources,
        names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryId;
    use chrono::{TimeZone, Utc};

    fn entry(id: EntryId, name: &str, source: &str) -> LogEntry {
        LogEntry {
            id,
            transaction: String::new(),
            datetime: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
            name: name.to_string(),
            value: "1".to_string(),
            source: source.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 1).unwrap(),
        }
    }

    #[test]
    fn should_return_zero_counts_for_empty_log() {
        // given
        let entries: Vec<LogEntry> = vec![];

        // when
        let stats = aggregate(&entries);

        // then
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.unique_sources, 0);
        assert_eq!(stats.unique_names, 0);
        assert!(stats.sources.is_empty());
        assert!(stats.names.is_empty());
    }

    #[test]
    fn should_count_distinct_sources_and_names() {
        // given
        let entries = vec![
            entry(1, "temperature", "sensor-01"),
            entry(2, "humidity", "sensor-01"),
            entry(3, "temperature", "sensor-02"),
        ];

        // when
        let stats = aggregate(&entries);

        // then
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.unique_sources, 2);
        assert_eq!(stats.unique_names, 2);
    }

    #[test]
    fn should_list_values_in_first_occurrence_order() {
        // given
        let entries = vec![
            entry(1, "humidity", "sensor-02"),
            entry(2, "temperature", "sensor-01"),
            entry(3, "humidity", "sensor-02"),
            entry(4, "pressure", "sensor-03"),
        ];

        // when
        let stats = aggregate(&entries);

        // then
        assert_eq!(stats.names, vec!["humidity", "temperature", "pressure"]);
        assert_eq!(stats.sources, vec!["sensor-02", "sensor-01", "sensor-03"]);
    }
}
