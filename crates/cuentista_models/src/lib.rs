//! Provider clients for Cuentista generative capabilities.
//!
//! This crate implements the [`cuentista_interface`] capability traits
//! against concrete provider HTTP APIs. Currently one provider is shipped:
//! an OpenAI-compatible client covering chat completions (story text) and
//! image generation (story illustrations).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::OpenAiClient;
