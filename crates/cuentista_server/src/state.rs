//! Shared application state.

use crate::hub::CompletionHub;
use crate::mailer::Mailer;
use crate::pdf::StoryRenderer;
use crate::worker::GenerationQueue;
use cuentista_database::{ReadEventRepository, StoryRepository};
use std::sync::Arc;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Story records
    pub stories: Arc<dyn StoryRepository>,
    /// Read event log
    pub reads: Arc<dyn ReadEventRepository>,
    /// Submission handle for the generation queue
    pub queue: GenerationQueue,
    /// Completion notifications for blocking waits
    pub hub: Arc<CompletionHub>,
    /// Document renderer for PDF export
    pub renderer: Arc<dyn StoryRenderer>,
    /// Outbound notification mail
    pub mailer: Arc<dyn Mailer>,
}
