//! Identifier newtypes for owners and stories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of the owning user.
///
/// Owner identities come from an external authentication layer; this type
/// only carries them through lookups so every query is owner-scoped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct OwnerId(Uuid);

impl OwnerId {
    /// The raw UUID value.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parse an owner id from its string form.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Identifier of a story record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct StoryId(i32);

impl StoryId {
    /// The raw integer value.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}
