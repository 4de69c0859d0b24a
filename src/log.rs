//! Core event-log implementation with append, query, clear, and stats.
//!
//! This module provides [`EventLog`], the primary entry point for
//! interacting with the store. It owns the concurrency discipline over
//! the durable log file and is the only component that touches it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::registry::Registry;
use tokio::sync::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{EntryId, LogEntry};
use crate::query::{self, QueryPage, QueryParams};
use crate::sequence;
use crate::stats::{self, LogStats};
use crate::storage::{LogFile, Snapshot};

/// A record to be appended to the log.
///
/// `datetime` is the caller-supplied event time; when `None`, the server's
/// current time is used. `created_at` is never part of this type because
/// it is always server-assigned at append time.
#[derive(Debug, Clone, Default)]
pub struct AppendEntry {
    /// Logical category of the write, e.g. a batch or operation tag.
    pub transaction: String,
    /// Measurement or event name. Required.
    pub name: String,
    /// The value to record, already rendered to text.
    pub value: String,
    /// Producer identifier. Required.
    pub source: String,
    /// Event time; defaults to the current server time when omitted.
    pub datetime: Option<DateTime<Utc>>,
}

/// The event-log store.
///
/// # Thread Safety
///
/// `EventLog` is designed to be shared across tasks behind an `Arc`. All
/// methods take `&self`; internal synchronization is a single `RwLock`
/// over the log file. Mutating operations (append, clear) hold the write
/// guard; read-only operations (query, stats, snapshot) hold the read
/// guard, so readers never observe a half-written file and writers are
/// serialized into one well-defined total order.
///
/// Append holds the write guard for its **entire** duration, including
/// the read phase that loads the current entries: the next identifier is
/// `max(existing ids) + 1`, so releasing the guard between the read and
/// the write would let two concurrent appends compute the same id.
///
/// # Example
///
/// ```ignore
/// let log = EventLog::open(Config::default()).await?;
/// let id = log
///     .append(AppendEntry {
///         name: "temperature".into(),
///         value: "23.5".into(),
///         source: "sensor-01".into(),
///         ..Default::default()
///     })
///     .await?;
/// assert_eq!(id, 1);
/// ```
pub struct EventLog {
    clock: Arc<dyn Clock>,
    file: RwLock<LogFile>,
    decode_failures: Counter,
}

impl EventLog {
    /// Opens the log, creating the file with the canonical header if it
    /// does not exist.
    pub async fn open(config: Config) -> Result<Self> {
        Self::open_with_clock(config, Arc::new(SystemClock)).await
    }

    /// Opens the log with an explicit clock. Useful for tests that need
    /// deterministic `created_at` stamps.
    pub async fn open_with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let file = LogFile::new(config.log_file);
        file.create_if_missing()?;
        Ok(Self {
            clock,
            file: RwLock::new(file),
            decode_failures: Counter::default(),
        })
    }

    /// Registers store-level metrics with a Prometheus registry. The
    /// OpenMetrics encoder appends the _total suffix to the counter name.
    pub fn register_metrics(&self, registry: &mut Registry) {
        registry.register(
            "log_decode_failures",
            "Total number of persisted rows skipped as undecodable during loads",
            self.decode_failures.clone(),
        );
    }

    /// Appends one entry and returns its assigned identifier.
    ///
    /// Validates that `name` and `source` are non-empty, then performs the
    /// read-modify-append under the exclusive lock: load the full current
    /// log, allocate `max(id) + 1`, stamp `created_at`, and write exactly
    /// one row.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] when a required field is empty;
    /// [`Error::Storage`] when the file cannot be read or written. Storage
    /// failures are not retried.
    pub async fn append(&self, entry: AppendEntry) -> Result<EntryId> {
        if entry.name.is_empty() {
            return Err(Error::Validation("missing required field: name".to_string()));
        }
        if entry.source.is_empty() {
            return Err(Error::Validation(
                "missing required field: source".to_string(),
            ));
        }

        let file = self.file.write().await;
        let snapshot = file.load()?;
        self.observe_failures(&snapshot);

        let id = sequence::next_id(&snapshot.entries);
        let now = self.clock.now();
        let entry = LogEntry {
            id,
            transaction: entry.transaction,
            datetime: entry.datetime.unwrap_or(now),
            name: entry.name,
            value: entry.value,
            source: entry.source,
            created_at: now,
        };
        file.append_row(&entry)?;

        tracing::debug!(id, name = %entry.name, source = %entry.source, "appended entry");
        Ok(id)
    }

    /// Returns a filtered, paginated page of entries plus the total count
    /// after filtering but before pagination.
    pub async fn query(&self, params: QueryParams) -> Result<QueryPage> {
        let file = self.file.read().await;
        let snapshot = file.load()?;
        self.observe_failures(&snapshot);
        query::filter_and_paginate(snapshot.entries, &params)
    }

    /// Removes all entries, truncating the file back to just the header.
    /// Irreversible and idempotent.
    pub async fn clear(&self) -> Result<()> {
        let file = self.file.write().await;
        file.reset()?;
        tracing::info!(path = ?file.path(), "cleared event log");
        Ok(())
    }

    /// Computes distinct-value and count summaries over all entries.
    pub async fn stats(&self) -> Result<LogStats> {
        let file = self.file.read().await;
        let snapshot = file.load()?;
        self.observe_failures(&snapshot);
        Ok(stats::aggregate(&snapshot.entries))
    }

    /// Loads a full snapshot including the decode-failure warning list.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let file = self.file.read().await;
        let snapshot = file.load()?;
        self.observe_failures(&snapshot);
        Ok(snapshot)
    }

    fn observe_failures(&self, snapshot: &Snapshot) {
        if snapshot.failures.is_empty() {
            return;
        }
        self.decode_failures.inc_by(snapshot.failures.len() as u64);
        for failure in &snapshot.failures {
            tracing::warn!(row = failure.row, "skipping undecodable log row: {failure}");
        }
    }
}
