//! Filtering and pagination over a loaded snapshot.

use crate::error::{Error, Result};
use crate::model::LogEntry;

/// Parameters for a query over the log.
///
/// `limit` and `offset` are carried as signed integers so that a negative
/// value arriving at the HTTP boundary is rejected with a validation
/// error instead of being silently masked by an unsigned conversion.
#[derive(Debug, Clone)]
pub struct QueryParams {
    /// Maximum number of entries in the returned page.
    pub limit: i64,
    /// Number of filtered entries to skip before the page starts.
    pub offset: i64,
    /// When set, only entries whose source matches exactly.
    pub source: Option<String>,
    /// When set, only entries whose name matches exactly.
    pub name: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            source: None,
            name: None,
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage {
    /// Entries in ascending id (insertion) order.
    pub entries: Vec<LogEntry>,
    /// Count of entries passing the filter, before pagination.
    pub total: usize,
}

/// Applies filters, then pagination, preserving insertion order.
///
/// An entry passes when each set filter equals the corresponding field
/// exactly; no wildcards. `offset >= total` yields an empty page rather
/// than an error.
pub fn filter_and_paginate(entries: Vec<LogEntry>, params: &QueryParams) -> Result<QueryPage> {
    if params.limit < 0 {
        return Err(Error::Validation(format!(
            "limit must be non-negative, got {}",
            params.limit
        )));
    }
    if params.offset < 0 {
        return Err(Error::Validation(format!(
            "offset must be non-negative, got {}",
            params.offset
        )));
    }

    let filtered: Vec<LogEntry> = entries
        .into_iter()
        .filter(|entry| {
            params
                .source
                .as_ref()
                .map_or(true, |source| entry.source == *source)
                && params
                    .name
                    .as_ref()
                    .map_or(true, |name| entry.name == *name)
        })
        .collect();
    let total = filtered.len();

    let offset = params.offset as usize;
    let limit = params.limit as usize;
    let entries = if offset >= total {
        Vec::new()
    } else {
        filtered.into_iter().skip(offset).take(limit).collect()
    };

    Ok(QueryPage { entries, total })
}
