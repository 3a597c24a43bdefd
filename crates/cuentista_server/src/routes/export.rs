//! PDF export.

use crate::response::ApiError;
use crate::routes::Owner;
use crate::state::AppState;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderValue, Response, StatusCode};
use cuentista_core::{StoryId, StoryStatus};
use tracing::instrument;

/// Download a completed story as a PDF document.
///
/// The attachment filename carries the story title verbatim; titles with
/// characters a header value cannot hold are rejected rather than escaped.
#[instrument(skip(state), fields(story_id = id))]
pub async fn download_pdf(
    State(state): State<AppState>,
    Owner(owner): Owner,
    Path(id): Path<i32>,
) -> Result<Response<Body>, ApiError> {
    let row = state
        .stories
        .find(owner, StoryId::from(id))
        .await?
        .ok_or_else(ApiError::not_found)?;

    if row.story_status()? != StoryStatus::Completed {
        return Err(ApiError::not_found());
    }

    let bytes = state.renderer.render(&row)?;

    let disposition = format!("attachment; filename=\"{}.pdf\"", row.title);
    let disposition = HeaderValue::from_bytes(disposition.as_bytes()).map_err(|_| {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error al generar el PDF.",
        )
    })?;

    let mut response = Response::new(Body::from(bytes));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    response.headers_mut().insert(CONTENT_DISPOSITION, disposition);
    Ok(response)
}
