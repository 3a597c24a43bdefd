//! HTTP error responses.
//!
//! User-visible messages are generic and non-technical; the underlying
//! error detail goes to the logs. Ownership misses and genuinely absent
//! records share the same not-found reply, so the API discloses nothing
//! about records the caller does not own.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cuentista_error::{
    CuentistaError, CuentistaErrorKind, DatabaseError, DatabaseErrorKind, ServerErrorKind,
    ValidationError,
};
use serde_json::{Value, json};
use tracing::error;

const GENERIC_MESSAGE: &str = "Ocurrió un error al procesar tu solicitud. Inténtalo de nuevo.";

/// An error reply carrying a status code and a JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    /// A reply with an explicit status and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "message": message.into() }),
        }
    }

    /// The generic not-found reply.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Cuento no encontrado.")
    }

    /// The per-field validation reply.
    pub fn validation(err: &ValidationError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: json!({
                "message": "Faltan campos requeridos.",
                "missing": err.missing,
            }),
        }
    }

    /// Attach extra fields to the body alongside the message.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        if let Value::Object(map) = &mut self.body {
            map.insert(key.to_string(), value.into());
        }
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<CuentistaError> for ApiError {
    fn from(err: CuentistaError) -> Self {
        let reply = match err.kind() {
            CuentistaErrorKind::Database(db) if db.kind == DatabaseErrorKind::NotFound => {
                return ApiError::not_found();
            }
            CuentistaErrorKind::Server(server) if server.kind == ServerErrorKind::QueueFull => {
                ApiError::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "El servicio está ocupado. Inténtalo de nuevo en unos momentos.",
                )
            }
            _ => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE),
        };

        error!(error = %err, "Request failed");
        reply
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        CuentistaError::from(err).into()
    }
}
