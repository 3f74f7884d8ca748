//! Request and response bodies of the story service.

use serde::{Deserialize, Serialize};
use story_core::{StoryDraft, StoryRecord};

#[derive(Debug, Deserialize)]
pub(crate) struct StoriesResponse {
    pub stories: Vec<StoryRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StoryResponse {
    pub story: StoryRecord,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateStoryRequest<'a> {
    pub token: &'a str,
    pub story: &'a StoryDraft,
}

/// Body for operations that only carry the auth token.
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub token: &'a str,
}
