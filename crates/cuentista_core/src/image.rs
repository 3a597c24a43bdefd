//! Request and response types for image generation.

use serde::{Deserialize, Serialize};

/// Output quality tier for generated artwork.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageQuality {
    /// Standard quality
    Standard,
    /// High definition
    Hd,
}

/// Generic image generation request.
///
/// # Examples
///
/// ```
/// use cuentista_core::ImageRequest;
///
/// let request = ImageRequest::new("a storybook illustration");
/// assert_eq!(request.size, "1024x1024");
/// assert_eq!(request.count, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// The stylistic prompt describing the artwork
    pub prompt: String,
    /// Output resolution (e.g. "1024x1024")
    pub size: String,
    /// Quality tier
    pub quality: ImageQuality,
    /// Number of images to generate
    pub count: u8,
}

impl ImageRequest {
    /// A single standard-quality 1024x1024 image for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: "1024x1024".to_string(),
            quality: ImageQuality::Standard,
            count: 1,
        }
    }
}

/// The unified image response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Reference (URL) to the generated artwork
    pub url: String,
}
