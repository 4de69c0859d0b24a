//! HTTP route handlers for the event-log server.
//!
//! Request bodies are parsed by hand from the raw bytes so that malformed
//! JSON produces the same structured failure envelope as every other
//! error, instead of the framework's plain-text rejection.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};

use super::error::ApiError;
use super::metrics::Metrics;
use super::request::{CreateEntryRequest, ListParams, QuickParams};
use super::response::{
    CreateEntryResponse, ListEntriesResponse, MessageResponse, StatsResponse,
};
use crate::{Error, EventLog};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<EventLog>,
    pub metrics: Arc<Metrics>,
}

/// Handle POST /api/v1/log/entries
pub async fn handle_create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateEntryResponse>, ApiError> {
    let request: CreateEntryRequest = serde_json::from_slice(&body)
        .map_err(|err| Error::Validation(format!("invalid JSON: {err}")))?;

    let id = state.log.append(request.into_append()?).await?;
    state.metrics.log_entries_appended_total.inc();

    Ok(Json(CreateEntryResponse::created(id)))
}

/// Handle GET /api/v1/log/entries
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListEntriesResponse>, ApiError> {
    let query = params.to_query();
    let page = state.log.query(query.clone()).await?;

    Ok(Json(ListEntriesResponse::from_page(
        page,
        query.limit,
        query.offset,
    )))
}

/// Handle DELETE /api/v1/log/entries
pub async fn handle_clear(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.log.clear().await?;
    state.metrics.log_clear_operations_total.inc();

    Ok(Json(MessageResponse::ok("all log entries cleared")))
}

/// Handle GET /api/v1/log/stats
pub async fn handle_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.log.stats().await?;
    Ok(Json(StatsResponse::from(stats)))
}

/// Handle GET /quick
///
/// Query-parameter ingest for constrained device firmware, e.g.
/// `GET /quick?name=temperature&value=23.5&source=arduino-1`. The event
/// time is always server-assigned.
pub async fn handle_quick(
    State(state): State<AppState>,
    Query(params): Query<QuickParams>,
) -> Result<Json<CreateEntryResponse>, ApiError> {
    let id = state.log.append(params.into_append()).await?;
    state.metrics.log_entries_appended_total.inc();

    Ok(Json(CreateEntryResponse::created(id)))
}

/// Handle GET /metrics
pub async fn handle_metrics(State(state): State<AppState>) -> String {
    state.metrics.encode()
}

/// Handle GET /-/healthy
pub async fn handle_healthy() -> &'static str {
    "OK"
}

/// Handle GET /-/ready
pub async fn handle_ready() -> &'static str {
    "OK"
}
