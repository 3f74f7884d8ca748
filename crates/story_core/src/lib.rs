//! Story core: pure domain records and markup rendering.
mod markup;
mod story;
mod user;
mod view;

pub use markup::{generate_story_markup, FavoriteIndicator, StoryFragment};
pub use story::{host_name_of, StoryDraft, StoryId, StoryRecord};
pub use user::UserContext;
pub use view::{render_favorites, render_story_list, ContainerView};
