//! PostgreSQL persistence for Cuentista stories and read events.
//!
//! Repositories are defined as async traits so the HTTP handlers and the
//! generation workers share one seam: a PostgreSQL implementation backed by
//! an r2d2 connection pool (Diesel calls run on the blocking thread pool),
//! and an in-memory implementation for tests and database-free runs.
//!
//! The story row has a single writer per record: the worker that dequeued
//! it performs the one terminal transition (`pending` → `completed` or
//! `failed`), enforced with a status guard on the update itself.

#![forbid(unsafe_code)]

mod connection;
mod in_memory;
mod models;
mod read_event_repository;
pub mod schema;
mod story_repository;

pub use connection::{DbPool, create_pool, establish_connection};
pub use in_memory::InMemoryRepository;
pub use models::{NewReadEventRow, NewStoryRow, ReadEventRow, StoryCompletionUpdate, StoryRow};
pub use read_event_repository::{PostgresReadEventRepository, ReadEventRepository, ReadingStats};
pub use story_repository::{PostgresStoryRepository, StoryRepository};
