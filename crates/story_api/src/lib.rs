//! Story API: HTTP client for the story service.
mod client;
mod error;
mod wire;

pub use client::{ClientSettings, HttpStoryApi, StoryApi};
pub use error::{ApiError, ApiFailure};
