use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use snip_core::ServiceError;
use thiserror::Error;
use tracing::{debug, error};

pub type Result<T> = std::result::Result<T, ApiError>;

pub const LIST_UNAVAILABLE: &str = "Can not retrieve data from store";
pub const CREATE_UNAVAILABLE: &str = "Can not associate url";
pub const STORE_UNAVAILABLE: &str = "Storage unavailable";

/// Errors surfaced by the HTTP handlers.
///
/// Bodies are plain text. Store failures log the underlying cause and reply
/// with the operation-specific message carried in `unavailable`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unable to parse json")]
    InvalidRequestBody(#[source] serde_json::Error),

    #[error("{source}")]
    Service {
        unavailable: &'static str,
        #[source]
        source: ServiceError,
    },

    #[error("Can not export metrics")]
    Metrics(#[source] prometheus::Error),
}

impl ApiError {
    /// Wraps a service error, replying with `unavailable` if the store is down.
    pub fn service(unavailable: &'static str) -> impl FnOnce(ServiceError) -> Self {
        move |source| Self::Service {
            unavailable,
            source,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(source: ServiceError) -> Self {
        Self::Service {
            unavailable: STORE_UNAVAILABLE,
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidRequestBody(e) => {
                debug!(error = %e, "rejected request body");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Service {
                source: source @ (ServiceError::InvalidUrl(_) | ServiceError::AssociationNotFound(_)),
                ..
            } => {
                debug!(error = ?source, "rejected association request");
                (StatusCode::BAD_REQUEST, source.to_string())
            }
            ApiError::Service {
                unavailable,
                source: ServiceError::StoreUnavailable(e),
            } => {
                error!(error = %e, "association store failed");
                (StatusCode::INTERNAL_SERVER_ERROR, (*unavailable).to_owned())
            }
            ApiError::Metrics(e) => {
                error!(error = %e, "failed to encode metrics");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use snip_core::{ShortId, StorageError};

    async fn render(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn invalid_url_is_bad_request() {
        let err = ApiError::from(ServiceError::InvalidUrl("'x': relative URL".into()));
        assert_eq!(
            render(err).await,
            (StatusCode::BAD_REQUEST, "Invalid url format".to_string())
        );
    }

    #[tokio::test]
    async fn not_found_is_bad_request() {
        let id = ShortId::new("abcdefghi12345678910").unwrap();
        let err = ApiError::from(ServiceError::AssociationNotFound(id));
        assert_eq!(
            render(err).await,
            (StatusCode::BAD_REQUEST, "URL not found".to_string())
        );
    }

    #[tokio::test]
    async fn store_failure_uses_operation_message() {
        let cause = || ServiceError::StoreUnavailable(StorageError::Unavailable("down".into()));

        assert_eq!(
            render(ApiError::service(LIST_UNAVAILABLE)(cause())).await,
            (StatusCode::INTERNAL_SERVER_ERROR, LIST_UNAVAILABLE.to_string())
        );
        assert_eq!(
            render(ApiError::service(CREATE_UNAVAILABLE)(cause())).await,
            (StatusCode::INTERNAL_SERVER_ERROR, CREATE_UNAVAILABLE.to_string())
        );
        assert_eq!(
            render(ApiError::from(cause())).await,
            (StatusCode::INTERNAL_SERVER_ERROR, STORE_UNAVAILABLE.to_string())
        );
    }

    #[tokio::test]
    async fn unparsable_body() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            render(ApiError::InvalidRequestBody(cause)).await,
            (StatusCode::BAD_REQUEST, "Unable to parse json".to_string())
        );
    }
}
