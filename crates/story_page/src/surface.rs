use story_core::ContainerView;

/// Outward seam to the real page.
///
/// The binding layer owns the actual DOM: how the container is swapped, how
/// a removed row fades out, how the confirmation prompt is shown. The
/// controller only states what must happen.
pub trait Surface {
    /// Drop the loading placeholder shown before the first fetch lands.
    fn remove_loading_indicator(&mut self);
    /// Replace the container contents with a fresh render pass.
    fn replace_container(&mut self, view: &ContainerView);
    /// Detach the list item keyed by `story_id` (fade-out included).
    fn remove_story_item(&mut self, story_id: &str);
    /// Hide the story submission form.
    fn hide_submit_form(&mut self);
    /// Ask the user to confirm deleting `story_id`. Blocking.
    fn confirm_delete(&mut self, story_id: &str) -> bool;
}
