//! Error types for the Cuentista story generation service.
//!
//! This crate provides the foundation error types used throughout the Cuentista workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cuentista_error::{CuentistaResult, HttpError};
//!
//! fn fetch_data() -> CuentistaResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod validation;
mod generation;
#[cfg(feature = "database")]
mod database;
mod server;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use validation::ValidationError;
pub use generation::{GenerationError, GenerationErrorKind};
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use error::{CuentistaError, CuentistaErrorKind, CuentistaResult};
