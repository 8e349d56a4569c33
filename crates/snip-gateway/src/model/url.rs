use serde::{Deserialize, Serialize};

/// Body of `POST /` and `PUT /{id}`.
///
/// A missing `url` reads as the empty string and fails URL validation later.
#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
