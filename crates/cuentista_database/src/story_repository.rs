//! Repository for story records.

use crate::{DbPool, NewStoryRow, StoryCompletionUpdate, StoryRow};
use async_trait::async_trait;
use chrono::Utc;
use cuentista_core::{OwnerId, StoryContent, StoryId, StoryRequest, StoryStatus};
use cuentista_error::{CuentistaResult, DatabaseError, DatabaseErrorKind};
use diesel::prelude::*;
use tracing::instrument;

/// Repository trait for story record operations.
///
/// All owner-facing lookups are scoped by `(id, owner)`; a story owned by
/// someone else is indistinguishable from one that does not exist. The two
/// terminal transitions (`complete`, `fail`) are guarded so they only apply
/// to a `pending` row, which makes the pipeline's single terminal write a
/// storage-level invariant rather than a convention.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Persist a new story in `pending` state.
    async fn create(&self, owner: OwnerId, req: &StoryRequest) -> CuentistaResult<StoryRow>;

    /// Fetch a story scoped by owner.
    async fn find(&self, owner: OwnerId, id: StoryId) -> CuentistaResult<Option<StoryRow>>;

    /// Fetch a story by id regardless of owner.
    ///
    /// Used by generation workers, which hold only the story id; never
    /// exposed through the HTTP surface.
    async fn find_by_id(&self, id: StoryId) -> CuentistaResult<Option<StoryRow>>;

    /// All stories for an owner, newest first.
    async fn list(&self, owner: OwnerId) -> CuentistaResult<Vec<StoryRow>>;

    /// Terminal transition `pending` → `completed` with generated content.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the story is not `pending`.
    async fn complete(
        &self,
        id: StoryId,
        content: &StoryContent,
        estimated_read_seconds: i32,
    ) -> CuentistaResult<StoryRow>;

    /// Terminal transition `pending` → `failed`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the story is not `pending`.
    async fn fail(&self, id: StoryId) -> CuentistaResult<()>;

    /// Increment the read count of a completed story, scoped by owner.
    async fn mark_read(&self, owner: OwnerId, id: StoryId) -> CuentistaResult<StoryRow>;

    /// Flip the favorite flag unconditionally and return the new value.
    async fn toggle_favorite(&self, owner: OwnerId, id: StoryId) -> CuentistaResult<bool>;
}

/// PostgreSQL implementation of [`StoryRepository`].
///
/// Holds an r2d2 pool; each operation checks out a connection and runs the
/// Diesel query on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct PostgresStoryRepository {
    pool: DbPool,
}

impl PostgresStoryRepository {
    /// Create a new repository over a connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn with_conn<T, F>(&self, op: F) -> CuentistaResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, DatabaseError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))?;
            op(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
        .map_err(Into::into)
    }
}

#[async_trait]
impl StoryRepository for PostgresStoryRepository {
    #[instrument(skip(self, req), fields(theme = %req.theme))]
    async fn create(&self, owner: OwnerId, req: &StoryRequest) -> CuentistaResult<StoryRow> {
        use crate::schema::stories;

        let new_row = NewStoryRow::pending(owner, req);
        self.with_conn(move |conn| {
            diesel::insert_into(stories::table)
                .values(&new_row)
                .get_result(conn)
                .map_err(Into::into)
        })
        .await
    }

    async fn find(&self, owner: OwnerId, id: StoryId) -> CuentistaResult<Option<StoryRow>> {
        use crate::schema::stories::dsl;

        let owner = owner.as_uuid();
        let id = id.as_i32();
        self.with_conn(move |conn| {
            dsl::stories
                .filter(dsl::id.eq(id))
                .filter(dsl::owner.eq(owner))
                .first(conn)
                .optional()
                .map_err(Into::into)
        })
        .await
    }

    async fn find_by_id(&self, id: StoryId) -> CuentistaResult<Option<StoryRow>> {
        use crate::schema::stories::dsl;

        let id = id.as_i32();
        self.with_conn(move |conn| {
            dsl::stories
                .filter(dsl::id.eq(id))
                .first(conn)
                .optional()
                .map_err(Into::into)
        })
        .await
    }

    async fn list(&self, owner: OwnerId) -> CuentistaResult<Vec<StoryRow>> {
        use crate::schema::stories::dsl;

        let owner = owner.as_uuid();
        self.with_conn(move |conn| {
            dsl::stories
                .filter(dsl::owner.eq(owner))
                .order(dsl::created_at.desc())
                .load(conn)
                .map_err(Into::into)
        })
        .await
    }

    #[instrument(skip(self, content))]
    async fn complete(
        &self,
        id: StoryId,
        content: &StoryContent,
        estimated_read_seconds: i32,
    ) -> CuentistaResult<StoryRow> {
        use crate::schema::stories::dsl;

        let update = StoryCompletionUpdate {
            title: content.title().clone(),
            body: content.body().clone(),
            moral: content.moral().clone(),
            image_url: content.image_url().clone(),
            image_prompt: content.image_prompt().clone(),
            status: StoryStatus::Completed.as_str().to_string(),
            estimated_read_seconds,
            updated_at: Utc::now(),
        };

        let id = id.as_i32();
        self.with_conn(move |conn| {
            diesel::update(
                dsl::stories
                    .filter(dsl::id.eq(id))
                    .filter(dsl::status.eq(StoryStatus::Pending.as_str())),
            )
            .set(&update)
            .get_result(conn)
            .optional()
            .map_err(DatabaseError::from)?
            .ok_or_else(|| {
                DatabaseError::new(DatabaseErrorKind::InvalidState(
                    "story is not pending".to_string(),
                ))
            })
        })
        .await
    }

    #[instrument(skip(self))]
    async fn fail(&self, id: StoryId) -> CuentistaResult<()> {
        use crate::schema::stories::dsl;

        let id = id.as_i32();
        self.with_conn(move |conn| {
            let updated = diesel::update(
                dsl::stories
                    .filter(dsl::id.eq(id))
                    .filter(dsl::status.eq(StoryStatus::Pending.as_str())),
            )
            .set((
                dsl::status.eq(StoryStatus::Failed.as_str()),
                dsl::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(DatabaseError::from)?;

            if updated == 0 {
                return Err(DatabaseError::new(DatabaseErrorKind::InvalidState(
                    "story is not pending".to_string(),
                )));
            }
            Ok(())
        })
        .await
    }

    async fn mark_read(&self, owner: OwnerId, id: StoryId) -> CuentistaResult<StoryRow> {
        use crate::schema::stories::dsl;

        let owner = owner.as_uuid();
        let id = id.as_i32();
        self.with_conn(move |conn| {
            diesel::update(
                dsl::stories
                    .filter(dsl::id.eq(id))
                    .filter(dsl::owner.eq(owner)),
            )
            .set((
                dsl::read_count.eq(dsl::read_count + 1),
                dsl::updated_at.eq(Utc::now()),
            ))
            .get_result(conn)
            .optional()
            .map_err(DatabaseError::from)?
            .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound))
        })
        .await
    }

    async fn toggle_favorite(&self, owner: OwnerId, id: StoryId) -> CuentistaResult<bool> {
        use crate::schema::stories::dsl;

        let owner = owner.as_uuid();
        let id = id.as_i32();
        self.with_conn(move |conn| {
            let row: StoryRow = diesel::update(
                dsl::stories
                    .filter(dsl::id.eq(id))
                    .filter(dsl::owner.eq(owner)),
            )
            .set((
                dsl::is_favorite.eq(diesel::dsl::not(dsl::is_favorite)),
                dsl::updated_at.eq(Utc::now()),
            ))
            .get_result(conn)
            .optional()
            .map_err(DatabaseError::from)?
            .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound))?;

            Ok(row.is_favorite)
        })
        .await
    }
}
