//! Upstream music provider Web API.
//!
//! Each inbound request gets its own client bound to the caller's credential.
//! Handlers only see the capability traits below, so they can be exercised
//! against in-memory doubles.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub mod client;
pub mod config;
pub mod types;

pub use client::{WebApiClient, WebApiConnector};
pub use config::{DEFAULT_BASE_URL, UpstreamConfig};
pub use types::{
    CurrentlyPlaying, FullTrack, Image, Page, PlaylistOwner, SimpleAlbum, SimpleArtist,
    SimplePlaylist, User,
};

/// Errors returned by upstream calls.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Opaque bearer credential forwarded to the provider as-is.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Playback state and transport controls.
#[async_trait]
pub trait PlayerApi: Send + Sync {
    /// What is playing right now. "Nothing playing" is a default value, not an error.
    async fn currently_playing(&self) -> Result<CurrentlyPlaying, UpstreamError>;
    /// Start the given context, or resume the paused one when `None`.
    async fn play(&self, context_uri: Option<&str>) -> Result<(), UpstreamError>;
    async fn pause(&self) -> Result<(), UpstreamError>;
    async fn next(&self) -> Result<(), UpstreamError>;
    async fn previous(&self) -> Result<(), UpstreamError>;
}

/// Playlists of the authenticated user.
#[async_trait]
pub trait PlaylistApi: Send + Sync {
    async fn current_user_playlists(&self) -> Result<Page<SimplePlaylist>, UpstreamError>;
}

/// User profiles.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn current_user(&self) -> Result<User, UpstreamError>;
    async fn user_public_profile(&self, user_id: &str) -> Result<User, UpstreamError>;
}

/// Builds an upstream client of capability `C` bound to one credential.
pub trait Connector<C: ?Sized>: Send + Sync {
    fn connect(&self, credential: Credential) -> Arc<C>;
}
