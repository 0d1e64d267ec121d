//! API error type.
//!
//! Every failure is answered with a bare 500. Callers cannot tell an upstream
//! rejection from an unreachable upstream or a malformed request body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Errors a handler can end a request with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{context}: {source}")]
    Upstream {
        context: String,
        source: UpstreamError,
    },

    #[error("Failed to decode request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No upstream client attached to the request")]
    MissingClient,
}

impl ApiError {
    /// Wrap an upstream failure with what the handler was trying to do.
    pub fn upstream(context: impl Into<String>, source: UpstreamError) -> Self {
        ApiError::Upstream {
            context: context.into(),
            source,
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        self.status().into_response()
    }
}
