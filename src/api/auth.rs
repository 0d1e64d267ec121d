//! Credential middleware and upstream client extractor.
//!
//! The bearer credential is read from the `Authorization` header and handed to
//! a [`Connector`], which builds an upstream client bound to it. The client is
//! stored in the request extensions so handlers never parse the header
//! themselves.
//!
//! Nothing is validated locally: a missing or invalid credential is only
//! discovered when the upstream call fails.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use super::error::ApiError;
use crate::upstream::{Connector, Credential};

/// Read the credential from the `Authorization` header.
///
/// A `Bearer ` scheme prefix is stripped if present. A missing or non-ASCII
/// header gives an empty credential.
pub fn credential_from_headers(headers: &HeaderMap) -> Credential {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .trim();

    let token = match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim_start(),
        _ => value,
    };

    Credential::new(token)
}

/// Middleware that attaches an upstream client of capability `C` to the request.
pub async fn attach_client<C>(
    State(connector): State<Arc<dyn Connector<C>>>,
    mut request: Request,
    next: Next,
) -> Response
where
    C: ?Sized + Send + Sync + 'static,
{
    let credential = credential_from_headers(request.headers());
    let client = connector.connect(credential);
    request.extensions_mut().insert(Upstream(client));

    next.run(request).await
}

/// Upstream client extractor.
///
/// ```ignore
/// async fn handler(Upstream(client): Upstream<dyn PlayerApi>) -> StatusCode {
///     // client is bound to this request's credential
/// }
/// ```
pub struct Upstream<C: ?Sized>(pub Arc<C>);

impl<C: ?Sized> Clone for Upstream<C> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<S, C> FromRequestParts<S> for Upstream<C>
where
    S: Send + Sync,
    C: ?Sized + Send + Sync + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Upstream<C>>()
            .cloned()
            .ok_or(ApiError::MissingClient)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_prefix_stripped() {
        assert_eq!(credential_from_headers(&headers("Bearer abc")).as_str(), "abc");
        assert_eq!(credential_from_headers(&headers("bearer abc")).as_str(), "abc");
        assert_eq!(credential_from_headers(&headers("BEARER  abc")).as_str(), "abc");
    }

    #[test]
    fn test_raw_token_passed_through() {
        assert_eq!(credential_from_headers(&headers("abc")).as_str(), "abc");
    }

    #[test]
    fn test_other_scheme_passed_through() {
        assert_eq!(
            credential_from_headers(&headers("Basic dXNlcjpwYXNz")).as_str(),
            "Basic dXNlcjpwYXNz"
        );
    }

    #[test]
    fn test_missing_header_is_empty() {
        assert_eq!(credential_from_headers(&HeaderMap::new()).as_str(), "");
    }
}
