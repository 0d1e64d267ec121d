//! Playlist handler (list the user's playlists)

use axum::Json;
use axum::http::StatusCode;

use crate::api::auth::Upstream;
use crate::models::{PlaylistSummary, reduce_playlists};
use crate::upstream::PlaylistApi;

/// GET /playlist
///
/// Returns the authenticated user's playlists in upstream order.
/// Unlike the other services, a failure still carries a body: an empty array.
pub async fn list_my_playlists(
    Upstream(client): Upstream<dyn PlaylistApi>,
) -> (StatusCode, Json<Vec<PlaylistSummary>>) {
    match client.current_user_playlists().await {
        Ok(page) => (StatusCode::OK, Json(reduce_playlists(&page))),
        Err(e) => {
            tracing::error!("Failed to get user playlists: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::new()))
        }
    }
}
