use crate::{StoryId, StoryRecord, UserContext};

/// Visual state of the favorite star on one story row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteIndicator {
    /// Logged in and the story is in the user's favorites.
    Filled,
    /// Logged in, not favorited.
    Empty,
    /// Anonymous visitor; the star is not shown.
    Hidden,
}

impl FavoriteIndicator {
    pub fn css_class(self) -> &'static str {
        match self {
            FavoriteIndicator::Filled => "fas",
            FavoriteIndicator::Empty => "far",
            FavoriteIndicator::Hidden => "hidden",
        }
    }

    pub fn is_favorite(self) -> bool {
        matches!(self, FavoriteIndicator::Filled)
    }
}

/// Rendered form of one story row, ready for a binding layer to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryFragment {
    pub story_id: StoryId,
    pub indicator: FavoriteIndicator,
    pub show_delete: bool,
    pub url: String,
    pub title: String,
    pub host_name: String,
    pub author: String,
    pub username: String,
}

/// Render one story against the current session, if any.
///
/// Pure: reads its inputs, mutates nothing, never fails for a well-formed
/// record.
pub fn generate_story_markup(story: &StoryRecord, user: Option<&UserContext>) -> StoryFragment {
    let indicator = match user {
        Some(user) if user.is_favorite(&story.story_id) => FavoriteIndicator::Filled,
        Some(_) => FavoriteIndicator::Empty,
        None => FavoriteIndicator::Hidden,
    };
    let show_delete = user.is_some_and(|user| user.owns(&story.story_id));

    StoryFragment {
        story_id: story.story_id.clone(),
        indicator,
        show_delete,
        url: story.url.clone(),
        title: story.title.clone(),
        host_name: story.host_name(),
        author: story.author.clone(),
        username: story.username.clone(),
    }
}

impl StoryFragment {
    /// HTML list item keyed by the story id.
    pub fn to_html(&self) -> String {
        let star = format!(
            r#"<i class="story-star {} fa-star" data-favorite={}></i>"#,
            self.indicator.css_class(),
            self.indicator.is_favorite(),
        );
        let trash = if self.show_delete {
            r#"<span class="trash-can"><i class="fas fa-trash-alt"></i></span>"#
        } else {
            ""
        };
        format!(
            concat!(
                "<li id=\"{id}\">",
                "{star}",
                "{trash}",
                "<a href=\"{url}\" target=\"a_blank\" class=\"story-link\">{title}</a>",
                "<small class=\"story-hostname\">({host})</small>",
                "<small class=\"story-author\">by {author}</small>",
                "<small class=\"story-user\">posted by {username}</small>",
                "</li>",
            ),
            id = self.story_id,
            star = star,
            trash = trash,
            url = self.url,
            title = self.title,
            host = self.host_name,
            author = self.author,
            username = self.username,
        )
    }
}
