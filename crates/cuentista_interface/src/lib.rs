//! Trait definitions for Cuentista generative capabilities.
//!
//! This crate provides the capability traits that define the seams between
//! the story generation pipeline and concrete provider clients. Capabilities
//! are constructed explicitly and handed to the pipeline at call time, so
//! test doubles can stand in for real providers and no process-wide client
//! state exists.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Health, ImageGeneration, TextGeneration};
pub use types::HealthStatus;
