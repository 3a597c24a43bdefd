//! OpenAI-compatible API client.

use crate::openai::conversion;
use async_trait::async_trait;
use cuentista_core::{ImageRequest, ImageResponse, TextRequest, TextResponse};
use cuentista_error::{CuentistaResult, GenerationError, GenerationErrorKind};
use cuentista_interface::{Health, HealthStatus, ImageGeneration, TextGeneration};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TEXT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Bound on any single provider call, so a hung request cannot leave a
/// story pending indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for an OpenAI-compatible API.
///
/// Covers the two capabilities the story pipeline needs: chat completions
/// for story text and image generation for illustrations. The client is
/// constructed explicitly and passed to the pipeline; there is no global
/// instance.
///
/// # Example
///
/// ```no_run
/// use cuentista_models::OpenAiClient;
/// use cuentista_interface::TextGeneration;
/// use cuentista_core::{Message, TextRequestBuilder};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OpenAiClient::new()?;
///
/// let request = TextRequestBuilder::default()
///     .messages(vec![Message::user("Escribe un cuento corto")])
///     .max_tokens(500u32)
///     .build()?;
/// let response = client.generate(&request).await?;
/// println!("{}", response.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl OpenAiClient {
    /// Creates a new client from the environment.
    ///
    /// Reads `OPENAI_API_KEY` (required) and `OPENAI_BASE_URL` (optional,
    /// for OpenAI-compatible gateways).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set or the HTTP client cannot
    /// be initialized.
    #[instrument(skip_all)]
    pub fn new() -> CuentistaResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            GenerationError::new(GenerationErrorKind::CapabilityUnavailable)
        })?;

        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::with_api_key(api_key, base_url)
    }

    /// Creates a new client with an explicit API key and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_api_key(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> CuentistaResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Http(e.to_string())))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        })
    }

    /// Override the default text model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Override the default image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> CuentistaResult<R>
    where
        B: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending provider API request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Http(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status,
                message,
            })
            .into());
        }

        response
            .json()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Decode(e.to_string())).into())
    }
}

#[async_trait]
impl TextGeneration for OpenAiClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &TextRequest) -> CuentistaResult<TextResponse> {
        let wire = conversion::to_chat_request(req, &self.text_model);
        let response = self.post_json("/chat/completions", &wire).await?;
        conversion::from_chat_response(response).map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.text_model
    }
}

#[async_trait]
impl ImageGeneration for OpenAiClient {
    #[instrument(skip(self, req))]
    async fn illustrate(&self, req: &ImageRequest) -> CuentistaResult<ImageResponse> {
        let wire = conversion::to_image_request(req, &self.image_model);
        let response = self.post_json("/images/generations", &wire).await?;
        conversion::from_image_response(response).map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.image_model
    }
}

#[async_trait]
impl Health for OpenAiClient {
    async fn health(&self) -> CuentistaResult<HealthStatus> {
        let url = format!("{}/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::Http(e.to_string())))?;

        if response.status().is_success() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy {
                message: format!("provider returned {}", response.status()),
            })
        }
    }
}
