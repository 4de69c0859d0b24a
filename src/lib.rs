//! eventlog - a durable store for timestamped measurement and event records.
//!
//! The store persists entries from remote producers (sensors, device
//! firmware) into a single flat delimited file and answers filtered,
//! paginated, and aggregate queries over them. Entries are immutable once
//! appended; the only destructive operation is a full [`EventLog::clear`].
//!
//! # Architecture
//!
//! All state lives in one durable log file: a header row naming the column
//! order, followed by one row per entry. Every operation loads a consistent
//! snapshot of the file, so identifier allocation, filtering, and
//! aggregation always work from the same view of the data.
//!
//! # Key Concepts
//!
//! - **EventLog**: the main entry point providing append, query, clear, and
//!   stats operations. It owns the concurrency discipline: appends and
//!   clears are serialized behind an exclusive lock, reads share a lock
//!   that excludes writers.
//! - **Entry identifiers**: each entry is assigned `max(existing ids) + 1`
//!   at append time. Identifiers are unique and strictly increasing in
//!   insertion order; gaps are possible, duplicates are not.
//! - **Decode tolerance**: rows that cannot be reconstructed into a valid
//!   entry are skipped, counted, and reported as warnings rather than
//!   failing the whole load.
//!
//! # Example
//!
//! ```ignore
//! use eventlog::{AppendEntry, Config, EventLog, QueryParams};
//!
//! let log = EventLog::open(Config::default()).await?;
//!
//! let id = log
//!     .append(AppendEntry {
//!         name: "temperature".into(),
//!         value: "23.5".into(),
//!         source: "sensor-01".into(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let page = log.query(QueryParams::default()).await?;
//! println!("{} entries, newest id {}", page.total, id);
//! ```

mod clock;
mod config;
mod error;
mod log;
mod model;
mod query;
mod sequence;
mod serde;
#[cfg(feature = "http-server")]
pub mod server;
mod stats;
mod storage;

pub use clock::{Clock, MockClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use log::{AppendEntry, EventLog};
pub use model::{EntryId, LogEntry};
pub use query::{QueryPage, QueryParams};
pub use serde::DecodeFailure;
pub use stats::LogStats;
pub use storage::Snapshot;
