//! Status polling and blocking wait.

use crate::response::ApiError;
use crate::routes::Owner;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::{DateTime, Utc};
use cuentista_core::{StoryId, StoryStatus};
use cuentista_database::StoryRow;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Upper bound on a single blocking wait.
const MAX_WAIT_SECS: u64 = 120;

fn default_wait_secs() -> u64 {
    30
}

/// Diagnostic metadata returned alongside the status.
#[derive(Debug, Serialize)]
pub struct StatusDebug {
    story_id: i32,
    created_at: DateTime<Utc>,
    body_length: usize,
}

/// Poll payload for a story's generation state.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: StoryStatus,
    completed: bool,
    failed: bool,
    title: String,
    debug: StatusDebug,
}

fn status_payload(row: &StoryRow) -> Result<StatusResponse, ApiError> {
    let status = row.story_status()?;
    Ok(StatusResponse {
        status,
        completed: status == StoryStatus::Completed,
        failed: status == StoryStatus::Failed,
        title: row.title.clone(),
        debug: StatusDebug {
            story_id: row.id,
            created_at: row.created_at,
            body_length: row.body.len(),
        },
    })
}

/// Read-only status poll.
///
/// Never mutates state; callers poll at their own cadence. A story stuck
/// pending is indistinguishable from one still being generated.
#[instrument(skip(state), fields(story_id = id))]
pub async fn poll_status(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Path(id): Path<i32>,
) -> Result<Json<StatusResponse>, ApiError> {
    let row = state
        .stories
        .find(owner, StoryId::from(id))
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(status_payload(&row)?))
}

/// Query parameters for the blocking wait.
#[derive(Debug, Deserialize)]
pub struct WaitParams {
    /// Seconds to wait before falling back to the current status
    #[serde(default = "default_wait_secs")]
    timeout_secs: u64,
}

/// Blocking wait for a terminal state.
///
/// Parks on the completion hub until the story's terminal write lands or
/// the timeout elapses, then answers with the same payload as the poll.
#[instrument(skip(state), fields(story_id = id))]
pub async fn wait_status(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Path(id): Path<i32>,
    Query(params): Query<WaitParams>,
) -> Result<Json<StatusResponse>, ApiError> {
    let story_id = StoryId::from(id);

    let row = state
        .stories
        .find(owner, story_id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    if row.story_status()?.is_terminal() {
        return Ok(Json(status_payload(&row)?));
    }

    // Subscribe before re-reading the status: a terminal write landing
    // between the re-read and the await would otherwise be missed.
    let notify = state.hub.subscribe(story_id);
    let notified = notify.notified();
    tokio::pin!(notified);

    let row = state
        .stories
        .find(owner, story_id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    if !row.story_status()?.is_terminal() {
        let timeout = Duration::from_secs(params.timeout_secs.min(MAX_WAIT_SECS));
        let _ = tokio::time::timeout(timeout, notified).await;
    }

    let row = state
        .stories
        .find(owner, story_id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(status_payload(&row)?))
}
