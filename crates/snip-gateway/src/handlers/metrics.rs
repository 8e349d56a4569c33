use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::{ApiError, Result};
use crate::state::AppState;

pub async fn metrics_handler(State(state): State<AppState>) -> Result<Response> {
    let body = state.metrics.export().map_err(ApiError::Metrics)?;
    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response())
}
