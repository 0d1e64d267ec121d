//! Routers for the player, playlist and user services.
//!
//! Each service is an independent router with its own credential middleware.
//! They can be served alone or merged onto one listener.

use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::attach_client;
use super::handlers;
use crate::upstream::{Connector, PlayerApi, PlaylistApi, UserApi};

/// Which service a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Player,
    Playlist,
    User,
    /// All three services on one listener.
    All,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::Player => "player",
            Service::Playlist => "playlist",
            Service::User => "user",
            Service::All => "all",
        }
    }
}

/// Extension trait for Router to attach the upstream client middleware.
pub trait UpstreamRouterExt {
    /// Run [`attach_client`] for every route registered so far, so handlers can
    /// extract `Upstream<C>`.
    ///
    /// # Example
    /// ```ignore
    /// let router = Router::new()
    ///     .route("/player", get(handlers::get_current_playback))
    ///     .with_upstream::<dyn PlayerApi>(connector);
    /// ```
    fn with_upstream<C>(self, connector: Arc<dyn Connector<C>>) -> Self
    where
        C: ?Sized + Send + Sync + 'static;
}

impl UpstreamRouterExt for Router {
    fn with_upstream<C>(self, connector: Arc<dyn Connector<C>>) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.layer(middleware::from_fn_with_state(connector, attach_client::<C>))
    }
}

/// GET /player, POST /player/{play,pause,next,prev}
pub fn player_router(connector: Arc<dyn Connector<dyn PlayerApi>>) -> Router {
    Router::new()
        .route("/player", get(handlers::get_current_playback))
        .route("/player/play", post(handlers::start_or_resume_playback))
        .route("/player/pause", post(handlers::pause_playback))
        .route("/player/next", post(handlers::skip_to_next))
        .route("/player/prev", post(handlers::skip_to_previous))
        .with_upstream(connector)
}

/// GET /playlist
pub fn playlist_router(connector: Arc<dyn Connector<dyn PlaylistApi>>) -> Router {
    Router::new()
        .route("/playlist", get(handlers::list_my_playlists))
        .with_upstream(connector)
}

/// GET /user, GET /user/{userID}
pub fn user_router(connector: Arc<dyn Connector<dyn UserApi>>) -> Router {
    Router::new()
        .route("/user", get(handlers::get_my_profile))
        .route("/user/{user_id}", get(handlers::get_user_profile))
        .with_upstream(connector)
}

/// Permissive CORS: any origin and header, GET and POST.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Create the router for `service`, with CORS and request tracing.
pub fn create_router<K>(service: Service, connector: Arc<K>) -> Router
where
    K: Connector<dyn PlayerApi> + Connector<dyn PlaylistApi> + Connector<dyn UserApi> + 'static,
{
    let router = match service {
        Service::Player => player_router(connector),
        Service::Playlist => playlist_router(connector),
        Service::User => user_router(connector),
        Service::All => player_router(connector.clone())
            .merge(playlist_router(connector.clone()))
            .merge(user_router(connector)),
    };

    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
