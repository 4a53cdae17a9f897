use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body that falls back to `T::default()` when the body is absent or
/// unparseable, so field validation in the use case reports the problem.
#[derive(Debug, Default)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(LenientJson(value)),
            Err(rejection) => {
                tracing::debug!("Ignoring unreadable request body: {}", rejection.body_text());
                Ok(LenientJson(T::default()))
            }
        }
    }
}
