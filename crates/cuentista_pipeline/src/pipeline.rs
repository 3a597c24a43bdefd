//! Story pipeline orchestration.

use crate::{fallback, illustration, parser, prompt};
use cuentista_core::{StoryContent, StoryRequest};
use cuentista_error::{CuentistaResult, GenerationError, GenerationErrorKind};
use cuentista_interface::{ImageGeneration, TextGeneration};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Turns a validated story request into complete story content.
///
/// Capabilities are injected at construction; a pipeline with no text
/// capability produces deterministic fallback content. Each external call
/// is guarded independently: text failure falls back to template text
/// while the image step is still attempted, and image failure falls back
/// to the placeholder illustration. The pipeline makes exactly one
/// attempt per story, with no retries.
///
/// # Example
///
/// ```
/// use cuentista_pipeline::StoryPipeline;
/// use cuentista_core::{AgeBand, LengthTier, StoryRequestBuilder};
///
/// # #[tokio::main]
/// # async fn main() {
/// let request = StoryRequestBuilder::default()
///     .character("Luna")
///     .theme("ciencia")
///     .age_band(AgeBand::EarlyPrimary)
///     .length_tier(LengthTier::Corto)
///     .build()
///     .unwrap();
///
/// // No capabilities configured: deterministic fallback content.
/// let content = StoryPipeline::new().generate(&request).await;
/// assert_eq!(content.title(), "Las Increíbles Invenciones de Luna");
/// # }
/// ```
#[derive(Default)]
pub struct StoryPipeline {
    text: Option<Arc<dyn TextGeneration>>,
    image: Option<Arc<dyn ImageGeneration>>,
}

impl StoryPipeline {
    /// A pipeline with no capabilities configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a text generation capability.
    pub fn with_text(mut self, driver: Arc<dyn TextGeneration>) -> Self {
        self.text = Some(driver);
        self
    }

    /// Attach an image generation capability.
    pub fn with_image(mut self, driver: Arc<dyn ImageGeneration>) -> Self {
        self.image = Some(driver);
        self
    }

    /// Whether a text capability is configured.
    pub fn has_text_capability(&self) -> bool {
        self.text.is_some()
    }

    /// Produce complete content for a story request.
    ///
    /// Never fails: every external failure is recovered through the
    /// fallback path at the boundary where it occurs.
    #[instrument(skip(self, req), fields(character = %req.character, theme = %req.theme))]
    pub async fn generate(&self, req: &StoryRequest) -> StoryContent {
        let Some(text_driver) = self.text.as_deref() else {
            info!("No text capability configured, using fallback content");
            return fallback::fallback_content(req);
        };

        let (title, body, moral) = match self.generate_text(text_driver, req).await {
            Ok(parts) => parts,
            Err(e) => {
                warn!(error = %e, "Text generation failed, using fallback text");
                fallback::fallback_text(req)
            }
        };

        let (image_url, image_prompt) = match self.generate_image(&title, &req.theme).await {
            Ok(parts) => parts,
            Err(e) => {
                warn!(error = %e, "Image generation failed, using placeholder");
                (
                    fallback::PLACEHOLDER_IMAGE_URL.to_string(),
                    fallback::placeholder_image_prompt(&req.theme),
                )
            }
        };

        info!(title = %title, "Story content assembled");
        StoryContent::new(title, body, moral, image_url, image_prompt)
    }

    async fn generate_text(
        &self,
        driver: &dyn TextGeneration,
        req: &StoryRequest,
    ) -> CuentistaResult<(String, String, String)> {
        let wire = prompt::build_text_request(req);
        let response = driver.generate(&wire).await?;

        info!(
            provider = driver.provider_name(),
            chars = response.text.len(),
            "Text response received"
        );

        let parsed = parser::parse_response(&response.text);
        Ok(parser::resolve_content(
            parsed,
            &response.text,
            req.title_hint.as_deref(),
        ))
    }

    async fn generate_image(
        &self,
        title: &str,
        theme: &str,
    ) -> CuentistaResult<(String, String)> {
        let driver = self.image.as_deref().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::CapabilityUnavailable)
        })?;

        let wire = illustration::build_image_request(title, theme);
        let response = driver.illustrate(&wire).await?;

        info!(provider = driver.provider_name(), "Illustration generated");
        Ok((response.url, wire.prompt))
    }
}
