//! Notification hooks for the external authentication layer.
//!
//! Registration and password reset live outside this service; the auth
//! layer calls these hooks so the mail goes out through one place. Sends
//! are fire-and-forget: the reply acknowledges the dispatch, not delivery.

use crate::mailer;
use crate::response::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

/// Payload for the welcome notification.
#[derive(Debug, Deserialize)]
pub struct WelcomeNotification {
    /// Recipient address
    pub email: String,
    /// Display name of the fresh account
    pub username: String,
}

/// Payload for the password-reset notification.
#[derive(Debug, Deserialize)]
pub struct PasswordResetNotification {
    /// Recipient address
    pub email: String,
    /// Reset token to embed in the mail
    pub token: String,
}

/// Dispatch a welcome mail for a fresh registration.
#[instrument(skip_all)]
pub async fn send_welcome(
    State(state): State<AppState>,
    Json(payload): Json<WelcomeNotification>,
) -> Result<impl IntoResponse, ApiError> {
    mailer::spawn_welcome(Arc::clone(&state.mailer), payload.email, payload.username);
    Ok((StatusCode::ACCEPTED, Json(json!({ "queued": true }))))
}

/// Dispatch a password-reset mail.
#[instrument(skip_all)]
pub async fn send_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetNotification>,
) -> Result<impl IntoResponse, ApiError> {
    mailer::spawn_password_reset(Arc::clone(&state.mailer), payload.email, payload.token);
    Ok((StatusCode::ACCEPTED, Json(json!({ "queued": true }))))
}
