//! Generation queue and worker pool.
//!
//! Intake never runs generation on the request path. It enqueues the story
//! id on a bounded channel and a fixed pool of workers drains it, so
//! concurrent generation is capped by the worker count and queueing by the
//! channel capacity. A full queue surfaces to intake as a retryable error
//! instead of silently dropping work. Each execution runs under a deadline
//! and always leaves its story in a terminal state before signalling the
//! completion hub.

use crate::hub::CompletionHub;
use cuentista_core::{StoryId, estimate_read_seconds};
use cuentista_database::StoryRepository;
use cuentista_error::{
    CuentistaResult, DatabaseError, DatabaseErrorKind, GenerationError, GenerationErrorKind,
    ServerError, ServerErrorKind,
};
use cuentista_pipeline::StoryPipeline;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

/// Submission handle for the generation queue.
#[derive(Debug, Clone)]
pub struct GenerationQueue {
    tx: mpsc::Sender<StoryId>,
}

impl GenerationQueue {
    /// Enqueue a story for generation without blocking.
    ///
    /// # Errors
    ///
    /// Returns `QueueFull` when the queue is at capacity and `QueueClosed`
    /// when the worker pool has shut down.
    pub fn submit(&self, id: StoryId) -> CuentistaResult<()> {
        self.tx.try_send(id).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => {
                ServerError::new(ServerErrorKind::QueueFull).into()
            }
            mpsc::error::TrySendError::Closed(_) => {
                ServerError::new(ServerErrorKind::QueueClosed).into()
            }
        })
    }
}

/// Handles to the spawned generation workers.
#[derive(Debug)]
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Number of workers in the pool.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the pool has no workers.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Abort all workers.
    pub fn shutdown(self) {
        for handle in self.handles {
            handle.abort();
        }
    }
}

/// Spawn the generation worker pool and return its submission queue.
pub fn spawn_generation_workers(
    workers: usize,
    queue_capacity: usize,
    pipeline: Arc<StoryPipeline>,
    stories: Arc<dyn StoryRepository>,
    hub: Arc<CompletionHub>,
    deadline: Duration,
) -> (GenerationQueue, WorkerPool) {
    let (tx, rx) = mpsc::channel(queue_capacity);
    let rx = Arc::new(Mutex::new(rx));

    let handles = (0..workers.max(1))
        .map(|worker| {
            let rx = Arc::clone(&rx);
            let pipeline = Arc::clone(&pipeline);
            let stories = Arc::clone(&stories);
            let hub = Arc::clone(&hub);
            tokio::spawn(async move {
                info!(worker, "Generation worker started");
                loop {
                    let id = { rx.lock().await.recv().await };
                    let Some(id) = id else {
                        info!(worker, "Generation queue closed, worker stopping");
                        break;
                    };
                    execute(id, &pipeline, stories.as_ref(), deadline).await;
                    hub.notify(id);
                }
            })
        })
        .collect();

    (GenerationQueue { tx }, WorkerPool { handles })
}

/// Run one generation execution and guarantee a terminal outcome.
#[instrument(skip_all, fields(story_id = %id))]
async fn execute(
    id: StoryId,
    pipeline: &StoryPipeline,
    stories: &dyn StoryRepository,
    deadline: Duration,
) {
    if let Err(e) = run_generation(id, pipeline, stories, deadline).await {
        error!(error = %e, "Generation execution failed, marking story failed");
        if let Err(e) = stories.fail(id).await {
            error!(error = %e, "Could not mark story failed");
        }
    }
}

async fn run_generation(
    id: StoryId,
    pipeline: &StoryPipeline,
    stories: &dyn StoryRepository,
    deadline: Duration,
) -> CuentistaResult<()> {
    let row = stories
        .find_by_id(id)
        .await?
        .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound))?;

    if row.story_status()?.is_terminal() {
        warn!("Story already terminal, skipping execution");
        return Ok(());
    }

    let request = row.as_request()?;

    let content = tokio::time::timeout(deadline, pipeline.generate(&request))
        .await
        .map_err(|_| {
            GenerationError::new(GenerationErrorKind::Timeout(deadline.as_secs()))
        })?;

    let seconds = estimate_read_seconds(content.body());
    let row = stories.complete(id, &content, seconds).await?;

    info!(title = %row.title, "Story generation completed");
    Ok(())
}
