//! HTTP handlers.

pub mod player;
pub mod playlists;
pub mod users;

pub use player::*;
pub use playlists::*;
pub use users::*;
