use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use story_api::{ApiFailure, ClientSettings, HttpStoryApi, StoryApi};
use story_core::{StoryDraft, UserContext};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn settings(server: &MockServer) -> ClientSettings {
    ClientSettings {
        base_url: server.uri(),
        connect_timeout: Duration::from_secs(2),
        request_timeout: Duration::from_secs(2),
    }
}

fn user() -> UserContext {
    UserContext::new("reader", "secret-token")
}

#[tokio::test]
async fn fetch_all_preserves_server_order() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stories": [
                {"storyId": "s2", "title": "Second", "author": "Bea", "url": "https://b.example.com/2", "username": "bee"},
                {"storyId": "s1", "title": "First", "author": "Ann", "url": "https://a.example.com/1", "username": "ann"}
            ]
        })))
        .mount(&server)
        .await;

    let api = HttpStoryApi::new(settings(&server)).expect("client");
    let stories = api.fetch_all().await.expect("fetch ok");

    let ids: Vec<&str> = stories.iter().map(|s| s.story_id.as_str()).collect();
    assert_eq!(ids, ["s2", "s1"]);
    assert_eq!(stories[0].host_name(), "b.example.com");
}

#[tokio::test]
async fn create_sends_token_and_returns_server_record() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stories"))
        .and(body_json(json!({
            "token": "secret-token",
            "story": {"title": "Foo", "author": "Ann", "url": "https://example.com/x"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "story": {
                "storyId": "new-1",
                "title": "Foo",
                "author": "Ann",
                "url": "https://example.com/x",
                "username": "reader"
            }
        })))
        .mount(&server)
        .await;

    let api = HttpStoryApi::new(settings(&server)).expect("client");
    let draft = StoryDraft {
        title: "Foo".to_string(),
        author: "Ann".to_string(),
        url: "https://example.com/x".to_string(),
    };

    let created = api.create(&user(), &draft).await.expect("create ok");
    assert_eq!(created.story_id, "new-1");
    assert_eq!(created.username, "reader");
}

#[tokio::test]
async fn remove_deletes_by_id_under_token() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stories/s1"))
        .and(body_json(json!({"token": "secret-token"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpStoryApi::new(settings(&server)).expect("client");
    api.remove(&user(), "s1").await.expect("remove ok");
}

#[tokio::test]
async fn favorite_round_trip_targets_user_favorites() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/reader/favorites/s1"))
        .and(body_json(json!({"token": "secret-token"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/reader/favorites/s1"))
        .and(body_json(json!({"token": "secret-token"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpStoryApi::new(settings(&server)).expect("client");
    api.add_favorite(&user(), "s1").await.expect("add ok");
    api.remove_favorite(&user(), "s1").await.expect("remove ok");
}

#[tokio::test]
async fn http_status_maps_to_failure_kind() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = HttpStoryApi::new(settings(&server)).expect("client");
    let err = api.fetch_all().await.expect_err("should fail");
    assert_eq!(err.kind, ApiFailure::HttpStatus(404));
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"stories": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut slow = settings(&server);
    slow.request_timeout = Duration::from_millis(200);
    let api = HttpStoryApi::new(slow).expect("client");

    let err = api.fetch_all().await.expect_err("should time out");
    assert_eq!(err.kind, ApiFailure::Timeout);
}

#[tokio::test]
async fn malformed_body_maps_to_decode() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = HttpStoryApi::new(settings(&server)).expect("client");
    let err = api.fetch_all().await.expect_err("should fail decode");
    assert_eq!(err.kind, ApiFailure::Decode);
}
