//! Conversions between Cuentista types and the OpenAI wire format.

use crate::openai::dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageGenerationRequest,
    ImageGenerationResponse,
};
use cuentista_core::{ImageRequest, ImageResponse, Role, TextRequest, TextResponse};
use cuentista_error::{GenerationError, GenerationErrorKind};

fn role_label(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

/// Convert a generic text request into a chat completion request.
///
/// The request's own model, when set, overrides the client default.
pub fn to_chat_request(req: &TextRequest, default_model: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: req
            .model
            .clone()
            .unwrap_or_else(|| default_model.to_string()),
        messages: req
            .messages
            .iter()
            .map(|m| ChatMessage {
                role: role_label(m.role).to_string(),
                content: m.content.clone(),
            })
            .collect(),
        max_tokens: req.max_tokens,
        temperature: req.temperature,
        presence_penalty: req.presence_penalty,
        frequency_penalty: req.frequency_penalty,
    }
}

/// Extract the generated text from a chat completion response.
///
/// # Errors
///
/// Returns `EmptyResponse` if the response carries no choices or the first
/// choice has no content.
pub fn from_chat_response(resp: ChatCompletionResponse) -> Result<TextResponse, GenerationError> {
    let text = resp
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

    Ok(TextResponse { text })
}

/// Convert a generic image request into the wire format.
pub fn to_image_request(req: &ImageRequest, model: &str) -> ImageGenerationRequest {
    ImageGenerationRequest {
        model: model.to_string(),
        prompt: req.prompt.clone(),
        size: req.size.clone(),
        quality: req.quality.to_string(),
        n: req.count,
    }
}

/// Extract the artwork reference from an image generation response.
///
/// # Errors
///
/// Returns `EmptyResponse` if the response carries no images.
pub fn from_image_response(
    resp: ImageGenerationResponse,
) -> Result<ImageResponse, GenerationError> {
    let url = resp
        .data
        .into_iter()
        .next()
        .map(|d| d.url)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

    Ok(ImageResponse { url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::dto::{ChatChoice, ImageDatum};
    use cuentista_core::{Message, TextRequestBuilder};

    #[test]
    fn chat_request_prefers_explicit_model() {
        let req = TextRequestBuilder::default()
            .messages(vec![Message::user("hola")])
            .model("gpt-4o-mini")
            .build()
            .unwrap();

        let wire = to_chat_request(&req, "gpt-3.5-turbo");
        assert_eq!(wire.model, "gpt-4o-mini");
        assert_eq!(wire.messages[0].role, "user");
    }

    #[test]
    fn chat_request_serializes_without_unset_fields() {
        let req = TextRequestBuilder::default()
            .messages(vec![Message::system("eres un escritor")])
            .build()
            .unwrap();

        let json = serde_json::to_value(to_chat_request(&req, "gpt-3.5-turbo")).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert_eq!(json["messages"][0]["role"], "system");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let resp = ChatCompletionResponse { choices: vec![] };
        assert!(from_chat_response(resp).is_err());
    }

    #[test]
    fn whitespace_content_is_an_error() {
        let resp = ChatCompletionResponse {
            choices: vec![ChatChoice {
                message: ChatMessage {
                    role: "assistant".into(),
                    content: "   \n".into(),
                },
            }],
        };
        assert!(from_chat_response(resp).is_err());
    }

    #[test]
    fn first_image_url_is_used() {
        let resp = ImageGenerationResponse {
            data: vec![
                ImageDatum {
                    url: "https://img.example/a.png".into(),
                },
                ImageDatum {
                    url: "https://img.example/b.png".into(),
                },
            ],
        };
        assert_eq!(
            from_image_response(resp).unwrap().url,
            "https://img.example/a.png"
        );
    }
}
