//! Trait definitions for generative capabilities.

use crate::HealthStatus;
use async_trait::async_trait;
use cuentista_core::{ImageRequest, ImageResponse, TextRequest, TextResponse};
use cuentista_error::CuentistaResult;

/// Capability for generating free-form text from a structured prompt.
///
/// This is the minimal interface the story pipeline needs from a text
/// provider. The provider is treated as opaque; any failure surfaces as an
/// error for the caller to recover from.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Generate a single text blob for the given request.
    async fn generate(&self, req: &TextRequest) -> CuentistaResult<TextResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-3.5-turbo").
    fn model_name(&self) -> &str;
}

/// Capability for generating one piece of artwork from a stylistic prompt.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    /// Generate artwork and return a reference (URL) to it.
    async fn illustrate(&self, req: &ImageRequest) -> CuentistaResult<ImageResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "dall-e-3").
    fn model_name(&self) -> &str;
}

/// Trait for capabilities that support health checks.
#[async_trait]
pub trait Health {
    /// Check if the capability is available and functioning.
    async fn health(&self) -> CuentistaResult<HealthStatus>;
}
