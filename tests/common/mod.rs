#![allow(dead_code)]
//! Shared test doubles and request helpers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use music_gateway::api::{Service, create_router};
use music_gateway::upstream::{
    Connector, Credential, CurrentlyPlaying, Page, PlayerApi, PlaylistApi, SimplePlaylist,
    UpstreamError, User, UserApi,
};
use tower::util::ServiceExt;

/// In-memory upstream. Every call is counted; `fail` makes every call error.
#[derive(Default)]
pub struct MockUpstream {
    pub fail: bool,
    pub playing: CurrentlyPlaying,
    pub playlists: Page<SimplePlaylist>,
    pub user: User,
    pub calls: AtomicUsize,
    /// Arguments seen by `play` and `user_public_profile`.
    pub play_targets: Mutex<Vec<Option<String>>>,
    pub profile_ids: Mutex<Vec<String>>,
}

impl MockUpstream {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn call(&self) -> Result<(), UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(UpstreamError::Status {
                status: 401,
                message: "The access token expired".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PlayerApi for MockUpstream {
    async fn currently_playing(&self) -> Result<CurrentlyPlaying, UpstreamError> {
        self.call()?;
        Ok(self.playing.clone())
    }

    async fn play(&self, context_uri: Option<&str>) -> Result<(), UpstreamError> {
        self.play_targets
            .lock()
            .unwrap()
            .push(context_uri.map(str::to_string));
        self.call()
    }

    async fn pause(&self) -> Result<(), UpstreamError> {
        self.call()
    }

    async fn next(&self) -> Result<(), UpstreamError> {
        self.call()
    }

    async fn previous(&self) -> Result<(), UpstreamError> {
        self.call()
    }
}

#[async_trait]
impl PlaylistApi for MockUpstream {
    async fn current_user_playlists(&self) -> Result<Page<SimplePlaylist>, UpstreamError> {
        self.call()?;
        Ok(self.playlists.clone())
    }
}

#[async_trait]
impl UserApi for MockUpstream {
    async fn current_user(&self) -> Result<User, UpstreamError> {
        self.call()?;
        Ok(self.user.clone())
    }

    async fn user_public_profile(&self, user_id: &str) -> Result<User, UpstreamError> {
        self.profile_ids.lock().unwrap().push(user_id.to_string());
        self.call()?;
        Ok(self.user.clone())
    }
}

/// Connector handing out the same mock and recording the credentials it saw.
pub struct MockConnector {
    pub upstream: Arc<MockUpstream>,
    pub credentials: Mutex<Vec<String>>,
}

impl MockConnector {
    pub fn new(upstream: MockUpstream) -> Arc<Self> {
        Arc::new(Self {
            upstream: Arc::new(upstream),
            credentials: Mutex::new(Vec::new()),
        })
    }

    fn record(&self, credential: &Credential) {
        self.credentials
            .lock()
            .unwrap()
            .push(credential.as_str().to_string());
    }
}

impl Connector<dyn PlayerApi> for MockConnector {
    fn connect(&self, credential: Credential) -> Arc<dyn PlayerApi> {
        self.record(&credential);
        self.upstream.clone()
    }
}

impl Connector<dyn PlaylistApi> for MockConnector {
    fn connect(&self, credential: Credential) -> Arc<dyn PlaylistApi> {
        self.record(&credential);
        self.upstream.clone()
    }
}

impl Connector<dyn UserApi> for MockConnector {
    fn connect(&self, credential: Credential) -> Arc<dyn UserApi> {
        self.record(&credential);
        self.upstream.clone()
    }
}

/// Router for `service` backed by `upstream`.
pub fn build_app(service: Service, upstream: MockUpstream) -> (Router, Arc<MockConnector>) {
    let connector = MockConnector::new(upstream);
    (create_router(service, connector.clone()), connector)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", "Bearer test-token")
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Authorization", "Bearer test-token")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and return status and body text.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
