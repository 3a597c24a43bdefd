//! In-memory repository for tests and database-free runs.

use crate::models::ReadEventRow;
use crate::{ReadEventRepository, ReadingStats, StoryRepository, StoryRow};
use async_trait::async_trait;
use chrono::Utc;
use cuentista_core::{OwnerId, ReadModality, StoryContent, StoryId, StoryRequest, StoryStatus};
use cuentista_error::{CuentistaResult, DatabaseError, DatabaseErrorKind};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

/// In-memory implementation of both repository traits.
///
/// Mirrors the PostgreSQL semantics, including the pending-only guard on
/// terminal transitions and owner scoping on lookups, so worker and route
/// logic can be exercised without a database.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    stories: Mutex<HashMap<i32, StoryRow>>,
    events: Mutex<Vec<ReadEventRow>>,
    next_story_id: AtomicI32,
    next_event_id: AtomicI32,
}

impl InMemoryRepository {
    /// An empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn not_pending() -> DatabaseError {
        DatabaseError::new(DatabaseErrorKind::InvalidState(
            "story is not pending".to_string(),
        ))
    }
}

#[async_trait]
impl StoryRepository for InMemoryRepository {
    async fn create(&self, owner: OwnerId, req: &StoryRequest) -> CuentistaResult<StoryRow> {
        let id = self.next_story_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let row = StoryRow {
            id,
            owner: owner.as_uuid(),
            title: req
                .title_hint
                .clone()
                .unwrap_or_else(|| "Cuento Mágico".to_string()),
            main_character: req.character.clone(),
            theme: req.theme.clone(),
            age_band: req.age_band.as_str().to_string(),
            length_tier: req.length_tier.as_str().to_string(),
            title_hint: req.title_hint.clone(),
            body: String::new(),
            moral: String::new(),
            image_url: String::new(),
            image_prompt: String::new(),
            status: StoryStatus::Pending.as_str().to_string(),
            created_at: now,
            updated_at: now,
            is_favorite: false,
            read_count: 0,
            estimated_read_seconds: 0,
        };

        self.stories
            .lock()
            .expect("story map poisoned")
            .insert(id, row.clone());
        Ok(row)
    }

    async fn find(&self, owner: OwnerId, id: StoryId) -> CuentistaResult<Option<StoryRow>> {
        let stories = self.stories.lock().expect("story map poisoned");
        Ok(stories
            .get(&id.as_i32())
            .filter(|row| row.owner == owner.as_uuid())
            .cloned())
    }

    async fn find_by_id(&self, id: StoryId) -> CuentistaResult<Option<StoryRow>> {
        let stories = self.stories.lock().expect("story map poisoned");
        Ok(stories.get(&id.as_i32()).cloned())
    }

    async fn list(&self, owner: OwnerId) -> CuentistaResult<Vec<StoryRow>> {
        let stories = self.stories.lock().expect("story map poisoned");
        let mut rows: Vec<StoryRow> = stories
            .values()
            .filter(|row| row.owner == owner.as_uuid())
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn complete(
        &self,
        id: StoryId,
        content: &StoryContent,
        estimated_read_seconds: i32,
    ) -> CuentistaResult<StoryRow> {
        let mut stories = self.stories.lock().expect("story map poisoned");
        let row = stories
            .get_mut(&id.as_i32())
            .filter(|row| row.status == StoryStatus::Pending.as_str())
            .ok_or_else(Self::not_pending)?;

        row.title = content.title().clone();
        row.body = content.body().clone();
        row.moral = content.moral().clone();
        row.image_url = content.image_url().clone();
        row.image_prompt = content.image_prompt().clone();
        row.status = StoryStatus::Completed.as_str().to_string();
        row.estimated_read_seconds = estimated_read_seconds;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn fail(&self, id: StoryId) -> CuentistaResult<()> {
        let mut stories = self.stories.lock().expect("story map poisoned");
        let row = stories
            .get_mut(&id.as_i32())
            .filter(|row| row.status == StoryStatus::Pending.as_str())
            .ok_or_else(Self::not_pending)?;

        row.status = StoryStatus::Failed.as_str().to_string();
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn mark_read(&self, owner: OwnerId, id: StoryId) -> CuentistaResult<StoryRow> {
        let mut stories = self.stories.lock().expect("story map poisoned");
        let row = stories
            .get_mut(&id.as_i32())
            .filter(|row| row.owner == owner.as_uuid())
            .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound))?;

        row.read_count += 1;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn toggle_favorite(&self, owner: OwnerId, id: StoryId) -> CuentistaResult<bool> {
        let mut stories = self.stories.lock().expect("story map poisoned");
        let row = stories
            .get_mut(&id.as_i32())
            .filter(|row| row.owner == owner.as_uuid())
            .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound))?;

        row.is_favorite = !row.is_favorite;
        row.updated_at = Utc::now();
        Ok(row.is_favorite)
    }
}

#[async_trait]
impl ReadEventRepository for InMemoryRepository {
    async fn append(
        &self,
        owner: OwnerId,
        story: StoryId,
        modality: ReadModality,
        duration_seconds: i32,
    ) -> CuentistaResult<()> {
        let id = self.next_event_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.events.lock().expect("event log poisoned").push(ReadEventRow {
            id,
            owner: owner.as_uuid(),
            story_id: story.as_i32(),
            occurred_at: Utc::now(),
            modality: modality.as_str().to_string(),
            duration_seconds,
        });
        Ok(())
    }

    async fn stats(&self, owner: OwnerId) -> CuentistaResult<ReadingStats> {
        let events = self.events.lock().expect("event log poisoned");
        let mine = events.iter().filter(|e| e.owner == owner.as_uuid());

        let mut stats = ReadingStats::default();
        for event in mine {
            stats.total_reads += 1;
            stats.total_seconds += i64::from(event.duration_seconds);
        }
        Ok(stats)
    }
}
