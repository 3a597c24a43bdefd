//! Story generation status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a story record.
///
/// A story is created `Pending` and transitions exactly once to either
/// `Completed` or `Failed`. No pipeline write occurs after the terminal
/// transition.
///
/// # Examples
///
/// ```
/// use cuentista_core::StoryStatus;
///
/// assert!(!StoryStatus::Pending.is_terminal());
/// assert!(StoryStatus::Completed.is_terminal());
/// assert_eq!(StoryStatus::Failed.as_str(), "failed");
/// ```
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
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoryStatus {
    /// Generation has been scheduled but has not finished
    Pending,
    /// Generation finished and content is available
    Completed,
    /// Generation failed; no content is available
    Failed,
}

impl StoryStatus {
    /// The wire/storage label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryStatus::Pending => "pending",
            StoryStatus::Completed => "completed",
            StoryStatus::Failed => "failed",
        }
    }

    /// Whether this status is terminal (no further pipeline writes).
    pub fn is_terminal(&self) -> bool {
        matches!(self, StoryStatus::Completed | StoryStatus::Failed)
    }
}
