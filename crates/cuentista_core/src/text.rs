//! Request and response types for text generation.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A message in a text generation conversation.
///
/// # Examples
///
/// ```
/// use cuentista_core::{Message, Role};
///
/// let message = Message {
///     role: Role::User,
///     content: "Escribe un cuento".to_string(),
/// };
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// A system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Generic text generation request.
///
/// # Examples
///
/// ```
/// use cuentista_core::{Message, TextRequestBuilder};
///
/// let request = TextRequestBuilder::default()
///     .messages(vec![Message::user("Hola")])
///     .max_tokens(100u32)
///     .temperature(0.7f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
pub struct TextRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Presence penalty (discourages repeating topics)
    pub presence_penalty: Option<f32>,
    /// Frequency penalty (discourages repeating tokens)
    pub frequency_penalty: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

/// The unified text response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextResponse {
    /// The generated text blob
    pub text: String,
}
