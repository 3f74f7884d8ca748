use std::sync::Arc;

use story_api::{ApiError, StoryApi};
use story_core::{render_favorites, render_story_list, StoryDraft, StoryRecord, UserContext};
use thiserror::Error;

use crate::{PageEvent, Surface};

/// Logical state of the story container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    AllStories,
    Favorites,
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no user is logged in")]
    NotLoggedIn,
    #[error("story {0} is not in the loaded collection")]
    UnknownStory(String),
}

/// Orchestrates fetch, render, and the user-initiated mutations.
///
/// Session context is handed in explicitly at login and dropped at logout;
/// nothing here is global. Operations run one at a time on `&mut self`;
/// overlapping triggers are not guarded, matching the page this replaces.
/// Errors propagate out of every operation for the binding layer to
/// present. No retry, no recovery.
pub struct PageController {
    api: Arc<dyn StoryApi>,
    stories: Vec<StoryRecord>,
    user: Option<UserContext>,
    view: ViewState,
}

impl PageController {
    pub fn new(api: Arc<dyn StoryApi>) -> Self {
        Self {
            api,
            stories: Vec::new(),
            user: None,
            view: ViewState::Loading,
        }
    }

    /// Install the session context produced by a successful login.
    pub fn set_user(&mut self, user: UserContext) {
        self.user = Some(user);
    }

    /// Drop the session context at logout.
    pub fn clear_user(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&UserContext> {
        self.user.as_ref()
    }

    pub fn stories(&self) -> &[StoryRecord] {
        &self.stories
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Single dispatch point for the binding layer.
    pub async fn handle(
        &mut self,
        surface: &mut dyn Surface,
        event: PageEvent,
    ) -> Result<(), PageError> {
        match event {
            PageEvent::StoriesRequested => self.load_and_show_all_stories(surface).await,
            PageEvent::StorySubmitted(draft) => self.submit_story(surface, draft).await,
            PageEvent::FavoritesRequested => self.show_favorites(surface),
            PageEvent::FavoriteToggled { story_id } => {
                self.toggle_favorite(surface, &story_id).await
            }
            PageEvent::DeleteClicked { story_id } => self.delete_story(surface, &story_id).await,
        }
    }

    /// Fetch the authoritative collection and render it in server order.
    pub async fn load_and_show_all_stories(
        &mut self,
        surface: &mut dyn Surface,
    ) -> Result<(), PageError> {
        log::debug!("load_and_show_all_stories");
        self.view = ViewState::Loading;
        self.stories = self.api.fetch_all().await?;
        surface.remove_loading_indicator();
        self.put_stories_on_page(surface);
        Ok(())
    }

    /// Create a story from the submitted form values.
    ///
    /// Post-submit policy: optimistic local update, no refetch. The created
    /// record joins `own_stories` and the front of the collection (the
    /// server lists newest first), then the all-stories view re-renders
    /// from local state and the form is hidden.
    pub async fn submit_story(
        &mut self,
        surface: &mut dyn Surface,
        draft: StoryDraft,
    ) -> Result<(), PageError> {
        log::debug!("submit_story: {}", draft.title);
        let user = self.user.as_mut().ok_or(PageError::NotLoggedIn)?;
        let created = self.api.create(user, &draft).await?;
        user.add_own(created.clone());
        self.stories.insert(0, created);
        self.put_stories_on_page(surface);
        surface.hide_submit_form();
        Ok(())
    }

    /// Render the favorites view from the session context. No network.
    pub fn show_favorites(&mut self, surface: &mut dyn Surface) -> Result<(), PageError> {
        log::debug!("show_favorites");
        let user = self.user.as_ref().ok_or(PageError::NotLoggedIn)?;
        surface.replace_container(&render_favorites(user));
        self.view = ViewState::Favorites;
        Ok(())
    }

    /// Delete a story after a confirmation gate.
    ///
    /// Declined confirmation is a strict no-op. A confirmed delete splices
    /// the id out of `own_stories` and `favorites` (first match each) and
    /// detaches the row; the collection itself stays stale until the next
    /// fetch.
    pub async fn delete_story(
        &mut self,
        surface: &mut dyn Surface,
        story_id: &str,
    ) -> Result<(), PageError> {
        if !surface.confirm_delete(story_id) {
            log::debug!("delete_story: declined for {story_id}");
            return Ok(());
        }
        log::debug!("delete_story: {story_id}");
        let user = self.user.as_mut().ok_or(PageError::NotLoggedIn)?;
        self.api.remove(user, story_id).await?;
        user.forget_story(story_id);
        surface.remove_story_item(story_id);
        Ok(())
    }

    /// Flip the favorite state of a story and refresh the current view so
    /// the star renders fresh.
    pub async fn toggle_favorite(
        &mut self,
        surface: &mut dyn Surface,
        story_id: &str,
    ) -> Result<(), PageError> {
        log::debug!("toggle_favorite: {story_id}");
        let user = self.user.as_mut().ok_or(PageError::NotLoggedIn)?;
        if user.is_favorite(story_id) {
            self.api.remove_favorite(user, story_id).await?;
            user.remove_favorite(story_id);
        } else {
            let story = self
                .stories
                .iter()
                .find(|s| s.story_id == story_id)
                .cloned()
                .ok_or_else(|| PageError::UnknownStory(story_id.to_string()))?;
            self.api.add_favorite(user, story_id).await?;
            user.add_favorite(story);
        }
        self.refresh_current_view(surface)
    }

    fn put_stories_on_page(&mut self, surface: &mut dyn Surface) {
        log::debug!("put_stories_on_page: {} stories", self.stories.len());
        surface.replace_container(&render_story_list(&self.stories, self.user.as_ref()));
        self.view = ViewState::AllStories;
    }

    fn refresh_current_view(&mut self, surface: &mut dyn Surface) -> Result<(), PageError> {
        match self.view {
            ViewState::Favorites => self.show_favorites(surface),
            ViewState::AllStories | ViewState::Loading => {
                self.put_stories_on_page(surface);
                Ok(())
            }
        }
    }
}
