use async_trait::async_trait;
use cuentista_core::{
    AgeBand, ImageRequest, ImageResponse, LengthTier, StoryRequest, StoryRequestBuilder,
    TextRequest, TextResponse,
};
use cuentista_error::{CuentistaResult, GenerationError, GenerationErrorKind};
use cuentista_interface::{ImageGeneration, TextGeneration};
use cuentista_pipeline::{PLACEHOLDER_IMAGE_URL, StoryPipeline};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Text double that returns a fixed response or always fails.
struct ScriptedText {
    response: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedText {
    fn responding(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TextGeneration for ScriptedText {
    async fn generate(&self, _req: &TextRequest) -> CuentistaResult<TextResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(text) => Ok(TextResponse { text: text.clone() }),
            None => Err(GenerationError::new(GenerationErrorKind::Api {
                status: 500,
                message: "provider down".into(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-text"
    }
}

/// Image double that returns a fixed URL or always fails.
struct ScriptedImage {
    url: Option<String>,
}

#[async_trait]
impl ImageGeneration for ScriptedImage {
    async fn illustrate(&self, _req: &ImageRequest) -> CuentistaResult<ImageResponse> {
        match &self.url {
            Some(url) => Ok(ImageResponse { url: url.clone() }),
            None => Err(GenerationError::new(GenerationErrorKind::Http(
                "connection refused".into(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-image"
    }
}

fn luna_request() -> StoryRequest {
    StoryRequestBuilder::default()
        .character("Luna")
        .theme("ciencia")
        .age_band(AgeBand::EarlyPrimary)
        .length_tier(LengthTier::Corto)
        .build()
        .unwrap()
}

const WELL_FORMED: &str = "TÍTULO: El Laboratorio Secreto\n\n\
                           CUENTO:\n\
                           Luna construyó un cohete de cartón.\n\
                           El cohete voló hasta la luna.\n\n\
                           MORALEJA:\n\
                           Inventar es aprender.";

#[tokio::test]
async fn no_capability_yields_fallback_content() {
    let content = StoryPipeline::new().generate(&luna_request()).await;

    assert_eq!(content.title(), "Las Increíbles Invenciones de Luna");
    assert_eq!(content.image_url(), PLACEHOLDER_IMAGE_URL);
    assert_eq!(
        content.moral(),
        "La curiosidad y el deseo de aprender nos llevan a descubrir cosas maravillosas."
    );
}

#[tokio::test]
async fn well_formed_response_is_parsed_into_content() {
    let pipeline = StoryPipeline::new()
        .with_text(Arc::new(ScriptedText::responding(WELL_FORMED)))
        .with_image(Arc::new(ScriptedImage {
            url: Some("https://img.example/rocket.png".into()),
        }));

    let content = pipeline.generate(&luna_request()).await;

    assert_eq!(content.title(), "El Laboratorio Secreto");
    assert!(content.body().contains("cohete de cartón"));
    assert_eq!(content.moral(), "Inventar es aprender.");
    assert_eq!(content.image_url(), "https://img.example/rocket.png");
    assert!(content.image_prompt().contains("El Laboratorio Secreto"));
}

#[tokio::test]
async fn text_failure_still_attempts_the_image() {
    let pipeline = StoryPipeline::new()
        .with_text(Arc::new(ScriptedText::failing()))
        .with_image(Arc::new(ScriptedImage {
            url: Some("https://img.example/fallback-art.png".into()),
        }));

    let content = pipeline.generate(&luna_request()).await;

    // Template text, real artwork.
    assert_eq!(content.title(), "Las Increíbles Invenciones de Luna");
    assert_eq!(content.image_url(), "https://img.example/fallback-art.png");
}

#[tokio::test]
async fn image_failure_falls_back_to_placeholder() {
    let pipeline = StoryPipeline::new()
        .with_text(Arc::new(ScriptedText::responding(WELL_FORMED)))
        .with_image(Arc::new(ScriptedImage { url: None }));

    let content = pipeline.generate(&luna_request()).await;

    assert_eq!(content.title(), "El Laboratorio Secreto");
    assert_eq!(content.image_url(), PLACEHOLDER_IMAGE_URL);
    assert_eq!(
        content.image_prompt(),
        "Imagen placeholder para cuento de ciencia"
    );
}

#[tokio::test]
async fn text_without_image_capability_uses_placeholder() {
    let pipeline =
        StoryPipeline::new().with_text(Arc::new(ScriptedText::responding(WELL_FORMED)));

    let content = pipeline.generate(&luna_request()).await;

    assert_eq!(content.title(), "El Laboratorio Secreto");
    assert_eq!(content.image_url(), PLACEHOLDER_IMAGE_URL);
}

#[tokio::test]
async fn unstructured_response_becomes_the_body() {
    let raw = "Érase una vez una niña que soñaba con las estrellas.";
    let pipeline = StoryPipeline::new().with_text(Arc::new(ScriptedText::responding(raw)));

    let mut req = luna_request();
    req.title_hint = Some("Sueños Estelares".into());
    let content = pipeline.generate(&req).await;

    assert_eq!(content.title(), "Sueños Estelares");
    assert_eq!(content.body(), raw);
}

#[tokio::test]
async fn pipeline_makes_exactly_one_text_attempt() {
    let text = Arc::new(ScriptedText::failing());
    let pipeline = StoryPipeline::new().with_text(Arc::clone(&text) as Arc<dyn TextGeneration>);

    let _ = pipeline.generate(&luna_request()).await;

    assert_eq!(text.calls.load(Ordering::SeqCst), 1);
}
