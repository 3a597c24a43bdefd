//! Read event modality.

use serde::{Deserialize, Serialize};

/// How a story was consumed when a read event was recorded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReadModality {
    /// The story text was read on screen
    Text,
    /// The story was listened to as audio
    Audio,
}

impl ReadModality {
    /// The wire/storage label for this modality.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadModality::Text => "text",
            ReadModality::Audio => "audio",
        }
    }
}
