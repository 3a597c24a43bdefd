//! Library and reading tracker routes.

use crate::response::ApiError;
use crate::routes::Owner;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use cuentista_core::{ReadModality, StoryId, StoryStatus};
use cuentista_database::{ReadingStats, StoryRow};
use serde_json::json;
use tracing::{instrument, warn};

/// Open a story for reading.
///
/// A completed story gets its read count incremented and a text-modality
/// read event appended. A pending story sends the caller back to the poll
/// flow; a failed story answers with a generic retry message and records
/// nothing.
#[instrument(skip(state), fields(story_id = id))]
pub async fn open_story(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let story_id = StoryId::from(id);
    let row = state
        .stories
        .find(owner, story_id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    match row.story_status()? {
        StoryStatus::Pending => Err(ApiError::new(
            StatusCode::CONFLICT,
            "El cuento todavía se está generando.",
        )
        .with_field("status", "pending")),
        StoryStatus::Failed => Err(ApiError::new(
            StatusCode::GONE,
            "Hubo un error generando el cuento. Inténtalo de nuevo.",
        )),
        StoryStatus::Completed => {
            let row = state.stories.mark_read(owner, story_id).await?;

            // The event log is best-effort; losing one event must not
            // block the read itself.
            if let Err(e) = state
                .reads
                .append(owner, story_id, ReadModality::Text, row.estimated_read_seconds)
                .await
            {
                warn!(error = %e, "Could not record read event");
            }

            Ok(Json(row))
        }
    }
}

/// All of the owner's stories, newest first.
pub async fn list_stories(
    State(state): State<AppState>,
    Owner(owner): Owner,
) -> Result<Json<Vec<StoryRow>>, ApiError> {
    Ok(Json(state.stories.list(owner).await?))
}

/// Flip the favorite flag and return the new value.
#[instrument(skip(state), fields(story_id = id))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let is_favorite = state
        .stories
        .toggle_favorite(owner, StoryId::from(id))
        .await?;

    let message = if is_favorite {
        "Agregado a favoritos"
    } else {
        "Removido de favoritos"
    };

    Ok(Json(json!({
        "success": true,
        "is_favorite": is_favorite,
        "message": message,
    })))
}

/// Aggregated reading statistics for the owner.
pub async fn reading_stats(
    State(state): State<AppState>,
    Owner(owner): Owner,
) -> Result<Json<ReadingStats>, ApiError> {
    Ok(Json(state.reads.stats(owner).await?))
}
