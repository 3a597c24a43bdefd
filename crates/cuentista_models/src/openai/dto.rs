//! Wire types for the OpenAI-compatible API.

use serde::{Deserialize, Serialize};

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Presence penalty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
    /// Frequency penalty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
}

/// A single chat message on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role label ("system", "user", "assistant")
    pub role: String,
    /// Message text
    pub content: String,
}

/// Chat completion response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatCompletionResponse {
    /// Generated choices; the client uses the first
    pub choices: Vec<ChatChoice>,
}

/// One generated completion choice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatMessage,
}

/// Image generation request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageGenerationRequest {
    /// Model identifier
    pub model: String,
    /// Stylistic prompt
    pub prompt: String,
    /// Output resolution (e.g. "1024x1024")
    pub size: String,
    /// Quality tier ("standard" or "hd")
    pub quality: String,
    /// Number of images
    pub n: u8,
}

/// Image generation response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageGenerationResponse {
    /// Generated images; the client uses the first
    pub data: Vec<ImageDatum>,
}

/// One generated image reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageDatum {
    /// URL of the generated artwork
    pub url: String,
}
