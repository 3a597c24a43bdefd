//! Story generation pipeline for Cuentista.
//!
//! This crate turns a validated [`cuentista_core::StoryRequest`] into
//! complete story content: title, body, moral, and an illustration
//! reference. The pipeline is exactly one attempt, all-or-fallback:
//!
//! 1. With no text capability configured, deterministic template content
//!    is produced directly.
//! 2. Text generation failures fall back to the template text; the image
//!    step is still attempted independently.
//! 3. Image generation failures fall back to a static placeholder.
//!
//! The pipeline itself never fails; every external call is guarded at the
//! boundary where it occurs and converted to a fallback value.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fallback;
mod illustration;
mod parser;
mod pipeline;
mod prompt;

pub use fallback::{
    PLACEHOLDER_IMAGE_URL, fallback_content, fallback_moral, fallback_text, fallback_title,
    placeholder_image_prompt,
};
pub use illustration::{build_image_prompt, build_image_request, visual_motif};
pub use parser::{DEFAULT_MORAL, DEFAULT_TITLE, ParsedResponse, parse_response, resolve_content};
pub use pipeline::StoryPipeline;
pub use prompt::{build_story_prompt, build_text_request, theme_elements};
