//! Story intake.

use crate::response::ApiError;
use crate::routes::Owner;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use cuentista_core::StoryRequestForm;
use serde_json::json;
use tracing::{info, instrument, warn};

/// Accept a story request, persist it pending, and enqueue generation.
///
/// Returns 202 with the story id immediately; generation happens on the
/// worker pool and the caller observes progress through the status
/// endpoints. Invalid forms get a 422 naming every missing field and
/// persist nothing.
#[instrument(skip_all)]
pub async fn create_story(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Json(form): Json<StoryRequestForm>,
) -> Result<impl IntoResponse, ApiError> {
    let request = form.validate().map_err(|e| ApiError::validation(&e))?;

    let row = state.stories.create(owner, &request).await?;
    let id = row.story_id();
    info!(story_id = %id, theme = %request.theme, "Story created, scheduling generation");

    if let Err(e) = state.queue.submit(id) {
        // The pending record would otherwise be orphaned: no worker will
        // ever pick it up, so it gets failed right away.
        warn!(story_id = %id, error = %e, "Could not enqueue generation");
        if let Err(fail_err) = state.stories.fail(id).await {
            warn!(story_id = %id, error = %fail_err, "Could not fail orphaned story");
        }
        state.hub.notify(id);
        return Err(e.into());
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "story_id": id, "status": "pending" })),
    ))
}
