//! HTTP client for the provider's Web API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::types::{CurrentlyPlaying, Page, SimplePlaylist, User};
use super::{Connector, Credential, PlayerApi, PlaylistApi, UpstreamError, UserApi};

/// Error body returned by the provider on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct PlayBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    context_uri: Option<&'a str>,
}

/// Provider client bound to a single credential.
#[derive(Clone)]
pub struct WebApiClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl WebApiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, credential: Credential) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            credential,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send with the bearer credential and turn non-2xx statuses into errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, UpstreamError> {
        let response = request.bearer_auth(self.credential.as_str()).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or_default().to_string());

        Err(UpstreamError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Transport command without a request body.
    async fn command(&self, request: RequestBuilder) -> Result<(), UpstreamError> {
        self.send(request.header(header::CONTENT_LENGTH, 0)).await?;
        Ok(())
    }
}

#[async_trait]
impl PlayerApi for WebApiClient {
    async fn currently_playing(&self) -> Result<CurrentlyPlaying, UpstreamError> {
        let response = self
            .send(self.http.get(self.url("/me/player/currently-playing")))
            .await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(CurrentlyPlaying::default());
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(CurrentlyPlaying::default());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn play(&self, context_uri: Option<&str>) -> Result<(), UpstreamError> {
        let body = PlayBody { context_uri };
        self.send(self.http.put(self.url("/me/player/play")).json(&body))
            .await?;
        Ok(())
    }

    async fn pause(&self) -> Result<(), UpstreamError> {
        self.command(self.http.put(self.url("/me/player/pause")))
            .await
    }

    async fn next(&self) -> Result<(), UpstreamError> {
        self.command(self.http.post(self.url("/me/player/next")))
            .await
    }

    async fn previous(&self) -> Result<(), UpstreamError> {
        self.command(self.http.post(self.url("/me/player/previous")))
            .await
    }
}

#[async_trait]
impl PlaylistApi for WebApiClient {
    async fn current_user_playlists(&self) -> Result<Page<SimplePlaylist>, UpstreamError> {
        self.get_json("/me/playlists").await
    }
}

#[async_trait]
impl UserApi for WebApiClient {
    async fn current_user(&self) -> Result<User, UpstreamError> {
        self.get_json("/me").await
    }

    async fn user_public_profile(&self, user_id: &str) -> Result<User, UpstreamError> {
        let path = format!("/users/{}", urlencoding::encode(user_id));
        self.get_json(&path).await
    }
}

/// Hands out a [`WebApiClient`] per request, sharing only the HTTP transport.
#[derive(Clone)]
pub struct WebApiConnector {
    http: reqwest::Client,
    base_url: String,
}

impl WebApiConnector {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn client(&self, credential: Credential) -> WebApiClient {
        WebApiClient::new(self.http.clone(), self.base_url.clone(), credential)
    }
}

impl Connector<dyn PlayerApi> for WebApiConnector {
    fn connect(&self, credential: Credential) -> Arc<dyn PlayerApi> {
        Arc::new(self.client(credential))
    }
}

impl Connector<dyn PlaylistApi> for WebApiConnector {
    fn connect(&self, credential: Credential) -> Arc<dyn PlaylistApi> {
        Arc::new(self.client(credential))
    }
}

impl Connector<dyn UserApi> for WebApiConnector {
    fn connect(&self, credential: Credential) -> Arc<dyn UserApi> {
        Arc::new(self.client(credential))
    }
}
