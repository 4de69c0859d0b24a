//! Configuration for opening an event log.

use std::path::PathBuf;

/// Configuration for opening an [`EventLog`](crate::EventLog).
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the durable log file. Created with the canonical header on
    /// first open if it does not exist.
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("eventlog.csv"),
        }
    }
}
