//! Repository for append-only read events.

use crate::{DbPool, NewReadEventRow};
use async_trait::async_trait;
use cuentista_core::{OwnerId, ReadModality, StoryId};
use cuentista_error::{CuentistaResult, DatabaseError, DatabaseErrorKind};
use diesel::prelude::*;
use serde::Serialize;

/// Aggregated reading statistics for an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReadingStats {
    /// Number of recorded read events
    pub total_reads: i64,
    /// Accumulated reading seconds across events
    pub total_seconds: i64,
}

/// Repository trait for read event operations.
///
/// Events are append-only; nothing updates or deletes them.
#[async_trait]
pub trait ReadEventRepository: Send + Sync {
    /// Append one read event.
    async fn append(
        &self,
        owner: OwnerId,
        story: StoryId,
        modality: ReadModality,
        duration_seconds: i32,
    ) -> CuentistaResult<()>;

    /// Aggregate statistics over an owner's events.
    async fn stats(&self, owner: OwnerId) -> CuentistaResult<ReadingStats>;
}

/// PostgreSQL implementation of [`ReadEventRepository`].
#[derive(Debug, Clone)]
pub struct PostgresReadEventRepository {
    pool: DbPool,
}

impl PostgresReadEventRepository {
    /// Create a new repository over a connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadEventRepository for PostgresReadEventRepository {
    async fn append(
        &self,
        owner: OwnerId,
        story: StoryId,
        modality: ReadModality,
        duration_seconds: i32,
    ) -> CuentistaResult<()> {
        use crate::schema::read_events;

        let new_row = NewReadEventRow {
            owner: owner.as_uuid(),
            story_id: story.as_i32(),
            modality: modality.as_str().to_string(),
            duration_seconds,
        };

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))?;
            diesel::insert_into(read_events::table)
                .values(&new_row)
                .execute(&mut conn)
                .map(|_| ())
                .map_err(DatabaseError::from)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
        .map_err(Into::into)
    }

    async fn stats(&self, owner: OwnerId) -> CuentistaResult<ReadingStats> {
        use crate::schema::read_events::dsl;
        use diesel::dsl::{count_star, sum};

        let owner = owner.as_uuid();
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))?;

            let (total_reads, total_seconds): (i64, Option<i64>) = dsl::read_events
                .filter(dsl::owner.eq(owner))
                .select((count_star(), sum(dsl::duration_seconds)))
                .first(&mut conn)
                .map_err(DatabaseError::from)?;

            Ok(ReadingStats {
                total_reads,
                total_seconds: total_seconds.unwrap_or(0),
            })
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
        .map_err(|e: DatabaseError| e.into())
    }
}
