use async_trait::async_trait;
use cuentista_core::{
    AgeBand, LengthTier, OwnerId, StoryRequest, StoryRequestBuilder, StoryStatus, TextRequest,
    TextResponse,
};
use cuentista_database::{InMemoryRepository, StoryRepository};
use cuentista_error::CuentistaResult;
use cuentista_interface::TextGeneration;
use cuentista_pipeline::StoryPipeline;
use cuentista_server::{CompletionHub, spawn_generation_workers};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

fn request() -> StoryRequest {
    StoryRequestBuilder::default()
        .character("Luna")
        .theme("ciencia")
        .age_band(AgeBand::EarlyPrimary)
        .length_tier(LengthTier::Corto)
        .build()
        .unwrap()
}

/// Text double that never answers within the worker deadline.
struct StalledText;

#[async_trait]
impl TextGeneration for StalledText {
    async fn generate(&self, _req: &TextRequest) -> CuentistaResult<TextResponse> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(TextResponse {
            text: "never".into(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "stalled"
    }

    fn model_name(&self) -> &str {
        "stalled-text"
    }
}

#[tokio::test]
async fn worker_completes_a_pending_story_with_fallback_content() {
    let repo = Arc::new(InMemoryRepository::new());
    let hub = Arc::new(CompletionHub::new());
    let (queue, workers) = spawn_generation_workers(
        2,
        8,
        Arc::new(StoryPipeline::new()),
        Arc::clone(&repo) as Arc<dyn StoryRepository>,
        Arc::clone(&hub),
        Duration::from_secs(5),
    );

    let owner = OwnerId::from(Uuid::new_v4());
    let row = repo.create(owner, &request()).await.unwrap();
    let id = row.story_id();

    // Subscribe before submitting so the completion signal cannot be missed.
    let notify = hub.subscribe(id);
    let notified = notify.notified();
    tokio::pin!(notified);

    queue.submit(id).unwrap();

    tokio::time::timeout(Duration::from_secs(5), notified)
        .await
        .expect("worker should signal completion");

    let row = repo.find(owner, id).await.unwrap().unwrap();
    assert_eq!(row.story_status().unwrap(), StoryStatus::Completed);
    assert_eq!(row.title, "Las Increíbles Invenciones de Luna");
    assert_eq!(row.image_url, "/static/images/cuento-placeholder.png");
    assert!(row.estimated_read_seconds >= 60);

    workers.shutdown();
}

#[tokio::test]
async fn stalled_generation_is_failed_at_the_deadline() {
    let repo = Arc::new(InMemoryRepository::new());
    let hub = Arc::new(CompletionHub::new());
    let pipeline = StoryPipeline::new().with_text(Arc::new(StalledText));
    let (queue, workers) = spawn_generation_workers(
        1,
        8,
        Arc::new(pipeline),
        Arc::clone(&repo) as Arc<dyn StoryRepository>,
        Arc::clone(&hub),
        Duration::from_millis(100),
    );

    let owner = OwnerId::from(Uuid::new_v4());
    let row = repo.create(owner, &request()).await.unwrap();
    let id = row.story_id();

    let notify = hub.subscribe(id);
    let notified = notify.notified();
    tokio::pin!(notified);

    queue.submit(id).unwrap();

    tokio::time::timeout(Duration::from_secs(5), notified)
        .await
        .expect("worker should signal the failure");

    let row = repo.find(owner, id).await.unwrap().unwrap();
    assert_eq!(row.story_status().unwrap(), StoryStatus::Failed);

    workers.shutdown();
}

#[tokio::test]
async fn unknown_story_id_does_not_wedge_the_worker() {
    let repo = Arc::new(InMemoryRepository::new());
    let hub = Arc::new(CompletionHub::new());
    let (queue, workers) = spawn_generation_workers(
        1,
        8,
        Arc::new(StoryPipeline::new()),
        Arc::clone(&repo) as Arc<dyn StoryRepository>,
        Arc::clone(&hub),
        Duration::from_secs(5),
    );

    // A story id that was never created: the execution fails internally
    // and the worker moves on to real work.
    queue.submit(cuentista_core::StoryId::from(424242)).unwrap();

    let owner = OwnerId::from(Uuid::new_v4());
    let row = repo.create(owner, &request()).await.unwrap();
    let id = row.story_id();

    let notify = hub.subscribe(id);
    let notified = notify.notified();
    tokio::pin!(notified);

    queue.submit(id).unwrap();

    tokio::time::timeout(Duration::from_secs(5), notified)
        .await
        .expect("worker should still process the next story");

    let row = repo.find(owner, id).await.unwrap().unwrap();
    assert_eq!(row.story_status().unwrap(), StoryStatus::Completed);

    workers.shutdown();
}

#[tokio::test]
async fn already_terminal_stories_are_not_rewritten() {
    let repo = Arc::new(InMemoryRepository::new());
    let hub = Arc::new(CompletionHub::new());
    let (queue, workers) = spawn_generation_workers(
        1,
        8,
        Arc::new(StoryPipeline::new()),
        Arc::clone(&repo) as Arc<dyn StoryRepository>,
        Arc::clone(&hub),
        Duration::from_secs(5),
    );

    let owner = OwnerId::from(Uuid::new_v4());
    let row = repo.create(owner, &request()).await.unwrap();
    let id = row.story_id();
    repo.fail(id).await.unwrap();

    let notify = hub.subscribe(id);
    let notified = notify.notified();
    tokio::pin!(notified);

    queue.submit(id).unwrap();

    tokio::time::timeout(Duration::from_secs(5), notified)
        .await
        .expect("worker should signal even for terminal stories");

    let row = repo.find(owner, id).await.unwrap().unwrap();
    assert_eq!(row.story_status().unwrap(), StoryStatus::Failed);

    workers.shutdown();
}
