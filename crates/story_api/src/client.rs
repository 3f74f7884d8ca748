use std::time::Duration;

use story_core::{StoryDraft, StoryRecord, UserContext};

use crate::wire::{CreateStoryRequest, StoriesResponse, StoryResponse, TokenRequest};
use crate::{ApiError, ApiFailure};

/// Connection settings for the story service.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Remote story collection.
///
/// `user` carries the auth token; the server enforces ownership and
/// authorization, the client does not.
#[async_trait::async_trait]
pub trait StoryApi: Send + Sync {
    /// Full story list, server order preserved.
    async fn fetch_all(&self) -> Result<Vec<StoryRecord>, ApiError>;
    /// Create a story under `user`; the server assigns the id.
    async fn create(
        &self,
        user: &UserContext,
        draft: &StoryDraft,
    ) -> Result<StoryRecord, ApiError>;
    /// Delete a story by id under `user`.
    async fn remove(&self, user: &UserContext, story_id: &str) -> Result<(), ApiError>;
    /// Add a story to `user`'s favorites.
    async fn add_favorite(&self, user: &UserContext, story_id: &str) -> Result<(), ApiError>;
    /// Remove a story from `user`'s favorites.
    async fn remove_favorite(&self, user: &UserContext, story_id: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpStoryApi {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl HttpStoryApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let raw = format!("{}/{path}", self.settings.base_url.trim_end_matches('/'));
        reqwest::Url::parse(&raw)
            .map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl StoryApi for HttpStoryApi {
    async fn fetch_all(&self) -> Result<Vec<StoryRecord>, ApiError> {
        log::debug!("fetch_all");
        let url = self.endpoint("stories")?;
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let response = expect_success(response)?;
        let body: StoriesResponse = response.json().await.map_err(map_reqwest_error)?;
        Ok(body.stories)
    }

    async fn create(
        &self,
        user: &UserContext,
        draft: &StoryDraft,
    ) -> Result<StoryRecord, ApiError> {
        log::debug!("create: {}", draft.title);
        let url = self.endpoint("stories")?;
        let request = CreateStoryRequest {
            token: &user.token,
            story: draft,
        };
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = expect_success(response)?;
        let body: StoryResponse = response.json().await.map_err(map_reqwest_error)?;
        Ok(body.story)
    }

    async fn remove(&self, user: &UserContext, story_id: &str) -> Result<(), ApiError> {
        log::debug!("remove: {story_id}");
        let url = self.endpoint(&format!("stories/{story_id}"))?;
        let response = self
            .client
            .delete(url)
            .json(&TokenRequest { token: &user.token })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_success(response)?;
        Ok(())
    }

    async fn add_favorite(&self, user: &UserContext, story_id: &str) -> Result<(), ApiError> {
        log::debug!("add_favorite: {story_id}");
        let url = self.endpoint(&format!("users/{}/favorites/{story_id}", user.username))?;
        let response = self
            .client
            .post(url)
            .json(&TokenRequest { token: &user.token })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_success(response)?;
        Ok(())
    }

    async fn remove_favorite(&self, user: &UserContext, story_id: &str) -> Result<(), ApiError> {
        log::debug!("remove_favorite: {story_id}");
        let url = self.endpoint(&format!("users/{}/favorites/{story_id}", user.username))?;
        let response = self
            .client
            .delete(url)
            .json(&TokenRequest { token: &user.token })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_success(response)?;
        Ok(())
    }
}

fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::new(
            ApiFailure::HttpStatus(status.as_u16()),
            status.to_string(),
        ))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(ApiFailure::Decode, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}
