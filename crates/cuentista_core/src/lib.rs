//! Core data types for the Cuentista story generation service.
//!
//! This crate provides the foundation data types used across all Cuentista crates:
//! the story request and its validation, the enumerated classifiers (age band,
//! length tier, status, read modality), generated story content, and the generic
//! request/response types used to talk to generative capabilities.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod age_band;
mod content;
mod ids;
mod image;
mod length;
mod modality;
mod reading;
mod request;
mod role;
mod status;
mod text;

pub use age_band::AgeBand;
pub use content::StoryContent;
pub use ids::{OwnerId, StoryId};
pub use image::{ImageQuality, ImageRequest, ImageResponse};
pub use length::LengthTier;
pub use modality::ReadModality;
pub use reading::estimate_read_seconds;
pub use request::{StoryRequest, StoryRequestBuilder, StoryRequestForm};
pub use role::Role;
pub use status::StoryStatus;
pub use text::{Message, TextRequest, TextRequestBuilder, TextResponse};
