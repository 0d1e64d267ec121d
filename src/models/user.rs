//! User profile model.

use serde::Serialize;

use crate::upstream::{Image, User};

/// Compact user profile, built from either the current user or a public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    #[serde(rename = "name")]
    pub display_name: String,
    pub id: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            display_name: user.display_name.clone(),
            id: user.id.clone(),
            image_url: Image::first_url(&user.images),
        }
    }
}
