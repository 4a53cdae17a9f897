use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Single path segment that never rejects the request.
///
/// A segment axum cannot decode (e.g. invalid UTF-8 after percent-decoding)
/// becomes an empty id, which matches no stored record. The use case still
/// authenticates first, so the caller sees 401 or 404 as a `{message}` body.
#[derive(Debug, Clone, Default)]
pub struct LenientPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for LenientPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => Ok(LenientPath(segment)),
            Err(rejection) => {
                tracing::debug!("Ignoring undecodable path segment: {}", rejection.body_text());
                Ok(LenientPath(String::new()))
            }
        }
    }
}
