use crate::StoryRecord;

/// Session-scoped data for the authenticated user.
///
/// Produced by the login flow (external to this workspace), handed to the
/// page controller explicitly, and dropped at logout. The two story lists
/// are local caches kept consistent with successful remote operations; they
/// may diverge from server state between actions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserContext {
    pub username: String,
    /// Opaque auth token the API consumes.
    pub token: String,
    pub favorites: Vec<StoryRecord>,
    pub own_stories: Vec<StoryRecord>,
}

impl UserContext {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
            favorites: Vec::new(),
            own_stories: Vec::new(),
        }
    }

    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.favorites.iter().any(|s| s.story_id == story_id)
    }

    pub fn owns(&self, story_id: &str) -> bool {
        self.own_stories.iter().any(|s| s.story_id == story_id)
    }

    pub fn add_own(&mut self, story: StoryRecord) {
        self.own_stories.push(story);
    }

    pub fn add_favorite(&mut self, story: StoryRecord) {
        self.favorites.push(story);
    }

    /// Remove the first favorite with this id, if any.
    pub fn remove_favorite(&mut self, story_id: &str) {
        if let Some(idx) = self.favorites.iter().position(|s| s.story_id == story_id) {
            self.favorites.remove(idx);
        }
    }

    /// Drop the first matching record from each local cache independently.
    pub fn forget_story(&mut self, story_id: &str) {
        if let Some(idx) = self.own_stories.iter().position(|s| s.story_id == story_id) {
            self.own_stories.remove(idx);
        }
        self.remove_favorite(story_id);
    }
}
