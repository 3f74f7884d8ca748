use std::sync::Once;

use story_core::{render_favorites, ContainerView, FavoriteIndicator, StoryRecord, UserContext};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn story(id: &str) -> StoryRecord {
    StoryRecord {
        story_id: id.to_string(),
        title: format!("Title {id}"),
        author: "Ann Author".to_string(),
        url: format!("https://example.com/{id}"),
        username: "poster".to_string(),
    }
}

#[test]
fn empty_favorites_render_single_placeholder() {
    init_logging();
    let user = UserContext::new("reader", "tok");

    let view = render_favorites(&user);

    assert_eq!(
        view,
        ContainerView::Placeholder("No favorites added!".to_string())
    );
    assert_eq!(view.to_html(), "<p>No favorites added!</p>");
}

#[test]
fn favorites_render_one_row_per_record_in_order() {
    init_logging();
    let mut user = UserContext::new("reader", "tok");
    user.add_favorite(story("s2"));
    user.add_favorite(story("s1"));

    let view = render_favorites(&user);

    let ContainerView::Stories(fragments) = view else {
        panic!("expected story list, got placeholder");
    };
    let ids: Vec<&str> = fragments.iter().map(|f| f.story_id.as_str()).collect();
    assert_eq!(ids, ["s2", "s1"]);
    assert!(fragments
        .iter()
        .all(|f| f.indicator == FavoriteIndicator::Filled));
}
