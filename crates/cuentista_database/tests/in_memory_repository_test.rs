use cuentista_core::{
    AgeBand, LengthTier, OwnerId, ReadModality, StoryContent, StoryRequest, StoryRequestBuilder,
    StoryStatus,
};
use cuentista_database::{InMemoryRepository, ReadEventRepository, StoryRepository};
use uuid::Uuid;

fn owner() -> OwnerId {
    OwnerId::from(Uuid::new_v4())
}

fn request() -> StoryRequest {
    StoryRequestBuilder::default()
        .character("Luna")
        .theme("ciencia")
        .age_band(AgeBand::EarlyPrimary)
        .length_tier(LengthTier::Corto)
        .build()
        .unwrap()
}

fn content() -> StoryContent {
    StoryContent::new(
        "Las Increíbles Invenciones de Luna",
        "Había una vez una inventora.",
        "La curiosidad es un don.",
        "/static/images/cuento-placeholder.png",
        "Imagen placeholder para cuento de ciencia",
    )
}

#[tokio::test]
async fn create_starts_pending() {
    let repo = InMemoryRepository::new();
    let row = repo.create(owner(), &request()).await.unwrap();

    assert_eq!(row.story_status().unwrap(), StoryStatus::Pending);
    assert_eq!(row.read_count, 0);
    assert!(!row.is_favorite);
}

#[tokio::test]
async fn complete_is_a_single_terminal_write() {
    let repo = InMemoryRepository::new();
    let row = repo.create(owner(), &request()).await.unwrap();
    let id = row.story_id();

    let done = repo.complete(id, &content(), 60).await.unwrap();
    assert_eq!(done.story_status().unwrap(), StoryStatus::Completed);
    assert_eq!(done.estimated_read_seconds, 60);

    // Second terminal write of either kind is rejected.
    assert!(repo.complete(id, &content(), 60).await.is_err());
    assert!(repo.fail(id).await.is_err());
}

#[tokio::test]
async fn fail_is_terminal_too() {
    let repo = InMemoryRepository::new();
    let row = repo.create(owner(), &request()).await.unwrap();
    let id = row.story_id();

    repo.fail(id).await.unwrap();
    let row = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.story_status().unwrap(), StoryStatus::Failed);
    assert!(repo.complete(id, &content(), 60).await.is_err());
}

#[tokio::test]
async fn lookups_are_owner_scoped() {
    let repo = InMemoryRepository::new();
    let alice = owner();
    let bob = owner();
    let row = repo.create(alice, &request()).await.unwrap();

    assert!(repo.find(alice, row.story_id()).await.unwrap().is_some());
    assert!(repo.find(bob, row.story_id()).await.unwrap().is_none());
    assert!(repo.toggle_favorite(bob, row.story_id()).await.is_err());
    assert!(repo.mark_read(bob, row.story_id()).await.is_err());
}

#[tokio::test]
async fn toggle_favorite_twice_restores_original() {
    let repo = InMemoryRepository::new();
    let alice = owner();
    let row = repo.create(alice, &request()).await.unwrap();
    let id = row.story_id();

    assert!(repo.toggle_favorite(alice, id).await.unwrap());
    assert!(!repo.toggle_favorite(alice, id).await.unwrap());

    let row = repo.find(alice, id).await.unwrap().unwrap();
    assert!(!row.is_favorite);
}

#[tokio::test]
async fn mark_read_increments() {
    let repo = InMemoryRepository::new();
    let alice = owner();
    let row = repo.create(alice, &request()).await.unwrap();
    let id = row.story_id();
    repo.complete(id, &content(), 60).await.unwrap();

    repo.mark_read(alice, id).await.unwrap();
    let row = repo.mark_read(alice, id).await.unwrap();
    assert_eq!(row.read_count, 2);
}

#[tokio::test]
async fn list_is_newest_first_per_owner() {
    let repo = InMemoryRepository::new();
    let alice = owner();
    let bob = owner();

    let first = repo.create(alice, &request()).await.unwrap();
    let second = repo.create(alice, &request()).await.unwrap();
    repo.create(bob, &request()).await.unwrap();

    let rows = repo.list(alice).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, second.id);
    assert_eq!(rows[1].id, first.id);
}

#[tokio::test]
async fn read_events_aggregate_per_owner() {
    let repo = InMemoryRepository::new();
    let alice = owner();
    let bob = owner();
    let row = repo.create(alice, &request()).await.unwrap();
    let id = row.story_id();

    repo.append(alice, id, ReadModality::Text, 120).await.unwrap();
    repo.append(alice, id, ReadModality::Audio, 300).await.unwrap();
    repo.append(bob, id, ReadModality::Text, 999).await.unwrap();

    let stats = repo.stats(alice).await.unwrap();
    assert_eq!(stats.total_reads, 2);
    assert_eq!(stats.total_seconds, 420);
}

#[tokio::test]
async fn row_reconstructs_its_request() {
    let repo = InMemoryRepository::new();
    let mut req = request();
    req.title_hint = Some("El Robot de Luna".into());
    let row = repo.create(owner(), &req).await.unwrap();

    let rebuilt = row.as_request().unwrap();
    assert_eq!(rebuilt, req);
}
