//! HTTP API module.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod router;

pub use auth::{Upstream, attach_client, credential_from_headers};
pub use error::ApiError;
pub use router::{Service, UpstreamRouterExt, create_router};
