//! Diesel models for stories and read events.

use chrono::{DateTime, Utc};
use cuentista_core::{
    AgeBand, LengthTier, OwnerId, StoryId, StoryRequest, StoryStatus,
};
use cuentista_error::{DatabaseError, DatabaseErrorKind};
use diesel::prelude::*;
use serde::Serialize;
use std::str::FromStr;
use uuid::Uuid;

/// Database row for the stories table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::stories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StoryRow {
    pub id: i32,
    pub owner: Uuid,
    pub title: String,
    pub main_character: String,
    pub theme: String,
    pub age_band: String,
    pub length_tier: String,
    pub title_hint: Option<String>,
    pub body: String,
    pub moral: String,
    pub image_url: String,
    pub image_prompt: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_favorite: bool,
    pub read_count: i32,
    pub estimated_read_seconds: i32,
}

impl StoryRow {
    /// The typed story identifier.
    pub fn story_id(&self) -> StoryId {
        StoryId::from(self.id)
    }

    /// The typed owner identifier.
    pub fn owner_id(&self) -> OwnerId {
        OwnerId::from(self.owner)
    }

    /// The typed generation status.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the stored label is not a known status.
    pub fn story_status(&self) -> Result<StoryStatus, DatabaseError> {
        StoryStatus::from_str(&self.status).map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::InvalidState(format!(
                "unknown story status '{}'",
                self.status
            )))
        })
    }

    /// Reconstruct the generation request this story was created from.
    ///
    /// The queue carries only story ids, so workers recover the request
    /// fields from the row itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the stored classifiers are not known labels.
    pub fn as_request(&self) -> Result<StoryRequest, DatabaseError> {
        let age_band = AgeBand::from_str(&self.age_band).map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::InvalidState(format!(
                "unknown age band '{}'",
                self.age_band
            )))
        })?;
        let length_tier = LengthTier::from_str(&self.length_tier).map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::InvalidState(format!(
                "unknown length tier '{}'",
                self.length_tier
            )))
        })?;

        Ok(StoryRequest {
            character: self.main_character.clone(),
            theme: self.theme.clone(),
            age_band,
            length_tier,
            title_hint: self.title_hint.clone(),
        })
    }
}

/// Insertable struct for creating a pending story at intake.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::stories)]
pub struct NewStoryRow {
    pub owner: Uuid,
    pub title: String,
    pub main_character: String,
    pub theme: String,
    pub age_band: String,
    pub length_tier: String,
    pub title_hint: Option<String>,
    pub status: String,
}

impl NewStoryRow {
    /// A pending row for a validated request.
    ///
    /// The title starts as the hint (or a placeholder) so status polls can
    /// show something before generation finishes; the pipeline overwrites
    /// it on completion.
    pub fn pending(owner: OwnerId, req: &StoryRequest) -> Self {
        Self {
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
            status: StoryStatus::Pending.as_str().to_string(),
        }
    }
}

/// Updateable struct for the terminal completion write.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::stories)]
pub struct StoryCompletionUpdate {
    pub title: String,
    pub body: String,
    pub moral: String,
    pub image_url: String,
    pub image_prompt: String,
    pub status: String,
    pub estimated_read_seconds: i32,
    pub updated_at: DateTime<Utc>,
}

/// Database row for the read_events table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::read_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReadEventRow {
    pub id: i32,
    pub owner: Uuid,
    pub story_id: i32,
    pub occurred_at: DateTime<Utc>,
    pub modality: String,
    pub duration_seconds: i32,
}

/// Insertable struct for appending a read event.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::read_events)]
pub struct NewReadEventRow {
    pub owner: Uuid,
    pub story_id: i32,
    pub modality: String,
    pub duration_seconds: i32,
}
