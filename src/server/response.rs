//! HTTP response types for the event-log server.

use serde::Serialize;

use crate::model::{EntryId, LogEntry};
use crate::query::QueryPage;
use crate::stats::LogStats;

/// Response to a successful create or quick-ingest request.
#[derive(Debug, Serialize)]
pub struct CreateEntryResponse {
    pub success: bool,
    pub message: String,
    pub id: EntryId,
}

impl CreateEntryResponse {
    pub fn created(id: EntryId) -> Self {
        Self {
            success: true,
            message: "log entry created".to_string(),
            id,
        }
    }
}

/// Response to a list request. `total` counts entries after filtering but
/// before pagination; `limit` and `offset` echo the effective parameters.
#[derive(Debug, Serialize)]
pub struct ListEntriesResponse {
    pub success: bool,
    pub entries: Vec<LogEntry>,
    pub total: usize,
    pub limit: i64,
    pub offset: i64,
}

impl ListEntriesResponse {
    pub fn from_page(page: QueryPage, limit: i64, offset: i64) -> Self {
        Self {
            success: true,
            entries: page.entries,
            total: page.total,
            limit,
            offset,
        }
    }
}

/// Response to a stats request.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub total_entries: usize,
    pub unique_sources: usize,
    pub unique_names: usize,
    pub sources: Vec<String>,
    pub names: Vec<String>,
}

impl From<LogStats> for StatsResponse {
    fn from(stats: LogStats) -> Self {
        Self {
            success: true,
            total_entries: stats.total_entries,
            unique_sources: stats.unique_sources,
            unique_names: stats.unique_names,
            sources: stats.sources,
            names: stats.names,
        }
    }
}

/// Plain success envelope for operations without a payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
