use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use snip_core::ShortId;

/// The `{id}` path segment, accepted only if it is a well-formed short id.
///
/// Anything else does not match the route and is answered with 404.
#[derive(Debug, Clone)]
pub struct ShortIdPath(pub ShortId);

impl<S> FromRequestParts<S> for ShortIdPath
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;

        ShortId::new(raw)
            .map(Self)
            .map_err(|_| StatusCode::NOT_FOUND)
    }
}
