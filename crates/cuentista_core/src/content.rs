//! Generated story content.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The full content produced for a story by the generation pipeline.
///
/// Produced either by the generative capability or by the deterministic
/// fallback generator; the story record does not distinguish the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct StoryContent {
    /// Story title
    title: String,
    /// Story body, paragraphs separated by blank lines
    body: String,
    /// Moral sentence closing the story
    moral: String,
    /// Reference to the illustration artwork
    image_url: String,
    /// The prompt that produced (or describes) the illustration
    image_prompt: String,
}

impl StoryContent {
    /// Assemble story content from its parts.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        moral: impl Into<String>,
        image_url: impl Into<String>,
        image_prompt: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            moral: moral.into(),
            image_url: image_url.into(),
            image_prompt: image_prompt.into(),
        }
    }
}
