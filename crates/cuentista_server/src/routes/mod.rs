//! HTTP routes.

mod export;
mod library;
mod notifications;
mod status;
mod stories;

use crate::response::ApiError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::extract::FromRequestParts;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use cuentista_core::OwnerId;
use serde_json::json;

/// Header carrying the authenticated owner id.
///
/// Authentication itself is an external concern; the upstream layer is
/// expected to resolve the session and forward the owner identity here.
const OWNER_HEADER: &str = "x-owner-id";

/// Extractor for the authenticated owner.
pub struct Owner(pub OwnerId);

#[async_trait]
impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| OwnerId::parse(value).ok())
            .map(Owner)
            .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "No autorizado."))
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/stories",
            post(stories::create_story).get(library::list_stories),
        )
        .route("/stories/stats", get(library::reading_stats))
        .route("/stories/:id", get(library::open_story))
        .route("/stories/:id/status", get(status::poll_status))
        .route("/stories/:id/wait", get(status::wait_status))
        .route("/stories/:id/favorite", post(library::toggle_favorite))
        .route("/stories/:id/pdf", get(export::download_pdf))
        .route("/notifications/welcome", post(notifications::send_welcome))
        .route(
            "/notifications/password-reset",
            post(notifications::send_password_reset),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
