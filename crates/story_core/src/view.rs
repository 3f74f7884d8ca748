use crate::{generate_story_markup, StoryFragment, StoryRecord, UserContext};

/// Content of the story container after a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerView {
    /// One fragment per story, in render order.
    Stories(Vec<StoryFragment>),
    /// A single message element shown instead of a list.
    Placeholder(String),
}

impl ContainerView {
    pub fn no_favorites() -> Self {
        ContainerView::Placeholder("No favorites added!".to_string())
    }

    pub fn to_html(&self) -> String {
        match self {
            ContainerView::Stories(fragments) => {
                fragments.iter().map(StoryFragment::to_html).collect()
            }
            ContainerView::Placeholder(message) => format!("<p>{message}</p>"),
        }
    }
}

/// Render a story sequence in order against the current session.
pub fn render_story_list(stories: &[StoryRecord], user: Option<&UserContext>) -> ContainerView {
    ContainerView::Stories(
        stories
            .iter()
            .map(|story| generate_story_markup(story, user))
            .collect(),
    )
}

/// Render the favorites view for a logged-in user.
///
/// An empty favorites list becomes a single placeholder element, not an
/// empty list.
pub fn render_favorites(user: &UserContext) -> ContainerView {
    if user.favorites.is_empty() {
        ContainerView::no_favorites()
    } else {
        render_story_list(&user.favorites, Some(user))
    }
}
