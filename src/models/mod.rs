//! Response models and the reducers that build them from upstream objects.

pub mod player;
pub mod playlist;
pub mod user;

pub use player::{PlayRequest, PlaybackSnapshot};
pub use playlist::{PlaylistSummary, reduce_playlists};
pub use user::UserProfile;
