//! Thin HTTP services in front of a music provider's Web API.

pub mod api;
pub mod models;
pub mod upstream;
