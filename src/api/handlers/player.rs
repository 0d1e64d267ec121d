//! Playback handlers (current playback, play, pause, next, previous)

use axum::Json;
use axum::body::Bytes;
use axum::http::StatusCode;

use crate::api::auth::Upstream;
use crate::api::error::ApiError;
use crate::models::{PlayRequest, PlaybackSnapshot};
use crate::upstream::PlayerApi;

/// GET /player
///
/// Returns a compact snapshot of what is currently playing.
pub async fn get_current_playback(
    Upstream(client): Upstream<dyn PlayerApi>,
) -> Result<Json<PlaybackSnapshot>, ApiError> {
    let playing = client
        .currently_playing()
        .await
        .map_err(|e| ApiError::upstream("Failed to get currently playing", e))?;

    Ok(Json(PlaybackSnapshot::from(&playing)))
}

/// POST /player/play
///
/// Body: `{"uri": string?}`. Without a uri the paused playback is resumed,
/// otherwise the given context is started. The body is parsed as JSON whatever
/// its content type; an empty body is a decode failure.
pub async fn start_or_resume_playback(
    Upstream(client): Upstream<dyn PlayerApi>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let request: PlayRequest = serde_json::from_slice(&body)?;

    client
        .play(request.target())
        .await
        .map_err(|e| ApiError::upstream("Failed to start playback", e))?;

    Ok(StatusCode::OK)
}

/// POST /player/pause
pub async fn pause_playback(
    Upstream(client): Upstream<dyn PlayerApi>,
) -> Result<StatusCode, ApiError> {
    client
        .pause()
        .await
        .map_err(|e| ApiError::upstream("Failed to pause playback", e))?;

    Ok(StatusCode::OK)
}

/// POST /player/next
pub async fn skip_to_next(Upstream(client): Upstream<dyn PlayerApi>) -> Result<StatusCode, ApiError> {
    client
        .next()
        .await
        .map_err(|e| ApiError::upstream("Failed to skip to next track", e))?;

    Ok(StatusCode::OK)
}

/// POST /player/prev
pub async fn skip_to_previous(
    Upstream(client): Upstream<dyn PlayerApi>,
) -> Result<StatusCode, ApiError> {
    client
        .previous()
        .await
        .map_err(|e| ApiError::upstream("Failed to skip to previous track", e))?;

    Ok(StatusCode::OK)
}
