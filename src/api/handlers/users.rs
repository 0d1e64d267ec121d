//! User profile handlers (current user, public profile)

use axum::Json;
use axum::extract::Path;

use crate::api::auth::Upstream;
use crate::api::error::ApiError;
use crate::models::UserProfile;
use crate::upstream::UserApi;

/// GET /user
///
/// Returns the authenticated user's profile.
pub async fn get_my_profile(
    Upstream(client): Upstream<dyn UserApi>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = client
        .current_user()
        .await
        .map_err(|e| ApiError::upstream("Failed to get current user", e))?;

    Ok(Json(UserProfile::from(&user)))
}

/// GET /user/{userID}
///
/// Returns another user's public profile. The id is only checked by upstream.
pub async fn get_user_profile(
    Path(user_id): Path<String>,
    Upstream(client): Upstream<dyn UserApi>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = client.user_public_profile(&user_id).await.map_err(|e| {
        ApiError::upstream(format!("Failed to get public profile of user {}", user_id), e)
    })?;

    Ok(Json(UserProfile::from(&user)))
}
