//! Entry codec for the durable log file.
//!
//! The log file is delimited text: one header row naming the columns,
//! then one row per entry. Encoding always emits the canonical column
//! order ([`COLUMNS`]); decoding is driven by the column names the file's
//! actual header declares, so files written by older schema versions
//! (for example, a header without the `transaction` column) remain
//! readable with the absent columns defaulting to empty.
//!
//! Timestamps are serialized as RFC 3339 with a UTC offset, which
//! round-trips exactly. Input timestamps carrying a non-UTC offset are
//! normalized to UTC before storage.
//!
//! # Decode Failures
//!
//! A row is reported as a [`DecodeFailure`] identified by its index when:
//!
//! - it has more cells than the header declares, or
//! - its `id` cell is missing, non-numeric, or zero, or
//! - its `name` or `source` cell is missing or empty.
//!
//! A row with fewer cells than the header uses defaults for the trailing
//! columns; the required-field checks above still apply afterwards.
//! Missing or unparsable timestamp cells default to the Unix epoch rather
//! than failing the row.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use csv::StringRecord;

use crate::error::{Error, Result};
use crate::model::{EntryId, LogEntry};

/// Canonical column order for encoding and for freshly created files.
pub const COLUMNS: [&str; 7] = [
    "id",
    "transaction",
    "datetime",
    "name",
    "value",
    "source",
    "created_at",
];

/// A persisted row that could not be reconstructed into a valid entry.
///
/// Decode failures are skipped and surfaced to the caller of a full-file
/// load as a warning list, never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    /// Index of the row in the file, counting the header as row 0.
    pub row: usize,
    /// Human-readable reason the row was skipped.
    pub reason: String,
}

impl DecodeFailure {
    fn new(row: usize, reason: impl Into<String>) -> Self {
        Self {
            row,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row, self.reason)
    }
}

/// Column positions declared by a log file's header row.
///
/// Decoding resolves every canonical column through this mapping, which
/// keeps backward-compatibility reasoning in one place: a header written
/// by an older schema simply yields `None` for the columns it predates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    id: usize,
    name: usize,
    source: usize,
    transaction: Option<usize>,
    datetime: Option<usize>,
    value: Option<usize>,
    created_at: Option<usize>,
    width: usize,
}

impl Header {
    /// Parses a header row into a column mapping.
    ///
    /// A header that does not declare the `id`, `name`, and `source`
    /// columns cannot locate any row's required fields, so it is fatal to
    /// the load rather than a per-row failure.
    pub fn parse(record: &StringRecord) -> Result<Self> {
        let position = |column: &str| record.iter().position(|cell| cell.trim() == column);
        let required = |column: &str| {
            position(column).ok_or_else(|| {
                Error::Storage(format!("malformed log header: missing {column:?} column"))
            })
        };

        Ok(Self {
            id: required("id")?,
            name: required("name")?,
            source: required("source")?,
            transaction: position("transaction"),
            datetime: position("datetime"),
            value: position("value"),
            created_at: position("created_at"),
            width: record.len(),
        })
    }
}

/// Renders an entry to a row in canonical column order.
pub fn encode(entry: &LogEntry) -> [String; 7] {
    [
        entry.id.to_string(),
        entry.transaction.clone(),
        format_timestamp(&entry.datetime),
        entry.name.clone(),
        entry.value.clone(),
        entry.source.clone(),
        format_timestamp(&entry.created_at),
    ]
}

/// Reconstructs an entry from a row, resolving columns through `header`.
pub fn decode(
    header: &Header,
    row: usize,
    record: &StringRecord,
) -> std::result::Result<LogEntry, DecodeFailure> {
    if record.len() > header.width {
        return Err(DecodeFailure::new(
            row,
            format!(
                "row has {} cells but the header declares {}",
                record.len(),
                header.width
            ),
        ));
    }

    let required = |index: usize, column: &str| {
        let cell = record.get(index).unwrap_or("");
        if cell.is_empty() {
            Err(DecodeFailure::new(
                row,
                format!("missing required field: {column}"),
            ))
        } else {
            Ok(cell)
        }
    };
    let optional = |index: Option<usize>| index.and_then(|i| record.get(i)).unwrap_or("");

    let id_text = required(header.id, "id")?;
    let id: EntryId = id_text
        .trim()
        .parse()
        .map_err(|_| DecodeFailure::new(row, format!("invalid id {id_text:?}")))?;
    if id == 0 {
        return Err(DecodeFailure::new(row, "id must be positive"));
    }

    let name = required(header.name, "name")?.to_string();
    let source = required(header.source, "source")?.to_string();

    Ok(LogEntry {
        id,
        transaction: optional(header.transaction).to_string(),
        datetime: parse_timestamp(optional(header.datetime)).unwrap_or(DateTime::UNIX_EPOCH),
        name,
        value: optional(header.value).to_string(),
        source,
        created_at: parse_timestamp(optional(header.created_at)).unwrap_or(DateTime::UNIX_EPOCH),
    })
}

/// Serializes a timestamp as RFC 3339 with a UTC offset.
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses a timestamp, accepting RFC 3339 with any offset or a naive
/// combined date-time interpreted as UTC.
pub(crate) fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(text) {
        return Some(aware.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
