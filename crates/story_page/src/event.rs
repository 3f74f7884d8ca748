use story_core::StoryDraft;

/// User-facing triggers a binding layer wires to real UI events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Page load or explicit "all stories" navigation.
    StoriesRequested,
    /// Submission form handed over its values. Suppressing the browser's
    /// default form navigation is the binding layer's job.
    StorySubmitted(StoryDraft),
    /// "Favorites" navigation clicked.
    FavoritesRequested,
    /// Star clicked on the row keyed by `story_id`.
    FavoriteToggled { story_id: String },
    /// Delete affordance clicked on the row keyed by `story_id`.
    DeleteClicked { story_id: String },
}
