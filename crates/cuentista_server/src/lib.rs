//! HTTP server and generation workers for Cuentista.
//!
//! The server exposes the intake, status, library, and export endpoints
//! over axum, and runs story generation on a bounded worker pool fed by an
//! in-process queue. Generation never runs on the request path: intake
//! enqueues a story id and returns immediately, and clients observe
//! progress through the status poller or the blocking wait endpoint backed
//! by the completion hub.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod hub;
mod mailer;
mod pdf;
mod response;
mod routes;
mod state;
mod worker;

pub use config::ServerConfig;
pub use hub::CompletionHub;
pub use mailer::{LogMailer, Mailer, spawn_password_reset, spawn_welcome};
pub use pdf::{PdfRenderer, StoryRenderer};
pub use response::ApiError;
pub use routes::router;
pub use state::AppState;
pub use worker::{GenerationQueue, WorkerPool, spawn_generation_workers};
