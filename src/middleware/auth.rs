use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

/// Raw credential from the `Authorization` header, if any.
///
/// Extraction never fails: a missing or unreadable header becomes `None` and
/// the use case decides that the caller is unauthorized. This keeps the
/// response body uniform with every other validation error.
#[derive(Debug, Clone, Default)]
pub struct AuthToken(pub Option<String>);

impl AuthToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(AuthToken(extract_token_from_headers(&parts.headers)))
    }
}

/// Accepts both `Authorization: <token>` and `Authorization: Bearer <token>`.
fn extract_token_from_headers(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?.trim_start();

    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn raw_token() {
        assert_eq!(extract_token_from_headers(&headers("abc.def.ghi")), Some("abc.def.ghi".into()));
    }

    #[test]
    fn bearer_token() {
        assert_eq!(extract_token_from_headers(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi".into()));
    }

    #[test]
    fn missing_or_empty() {
        assert_eq!(extract_token_from_headers(&HeaderMap::new()), None);
        assert_eq!(extract_token_from_headers(&headers("")), None);
        assert_eq!(extract_token_from_headers(&headers("Bearer ")), None);
    }
}
