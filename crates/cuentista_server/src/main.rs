use anyhow::Result;
use cuentista_database::{
    InMemoryRepository, PostgresReadEventRepository, PostgresStoryRepository, ReadEventRepository,
    StoryRepository, create_pool,
};
use cuentista_models::OpenAiClient;
use cuentista_pipeline::StoryPipeline;
use cuentista_server::{
    AppState, CompletionHub, LogMailer, PdfRenderer, ServerConfig, router,
    spawn_generation_workers,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load()?;

    let (stories, reads): (Arc<dyn StoryRepository>, Arc<dyn ReadEventRepository>) =
        if std::env::var("DATABASE_URL").is_ok() {
            let pool = create_pool()?;
            (
                Arc::new(PostgresStoryRepository::new(pool.clone())),
                Arc::new(PostgresReadEventRepository::new(pool)),
            )
        } else {
            warn!("DATABASE_URL not set, using in-memory storage");
            let shared = Arc::new(InMemoryRepository::new());
            (
                Arc::clone(&shared) as Arc<dyn StoryRepository>,
                shared as Arc<dyn ReadEventRepository>,
            )
        };

    let mut pipeline = StoryPipeline::new();
    match OpenAiClient::new() {
        Ok(client) => {
            let mut client = client;
            if let Some(model) = &config.text_model {
                client = client.with_text_model(model.clone());
            }
            if let Some(model) = &config.image_model {
                client = client.with_image_model(model.clone());
            }
            info!(provider = "openai", "Generative capability configured");
            let client = Arc::new(client);
            pipeline = pipeline
                .with_text(Arc::clone(&client) as _)
                .with_image(client as _);
        }
        Err(_) => {
            warn!("OPENAI_API_KEY not set, stories will use fallback content");
        }
    }

    let hub = Arc::new(CompletionHub::new());
    let (queue, _workers) = spawn_generation_workers(
        config.workers,
        config.queue_capacity,
        Arc::new(pipeline),
        Arc::clone(&stories),
        Arc::clone(&hub),
        config.generation_timeout(),
    );

    let state = AppState {
        stories,
        reads,
        queue,
        hub,
        renderer: Arc::new(PdfRenderer::new()),
        mailer: Arc::new(LogMailer),
    };

    let addr = config.bind_addr();
    info!(addr = %addr, workers = config.workers, "Starting Cuentista server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
