use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::UrlAssociation;

use crate::error::{ApiError, Result, CREATE_UNAVAILABLE, LIST_UNAVAILABLE};
use crate::extract::ShortIdPath;
use crate::model::UrlRequest;
use crate::state::AppState;

// The content type is not checked; any body that is not a JSON object is a 400.
fn parse_request(body: &[u8]) -> Result<UrlRequest> {
    serde_json::from_slice(body).map_err(ApiError::InvalidRequestBody)
}

pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<UrlAssociation>>> {
    let associations = state
        .associations
        .list()
        .await
        .map_err(ApiError::service(LIST_UNAVAILABLE))?;

    Ok(Json(associations))
}

pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UrlAssociation>> {
    let request = parse_request(&body)?;
    let association = state
        .associations
        .create(&request.url)
        .await
        .map_err(ApiError::service(CREATE_UNAVAILABLE))?;

    Ok(Json(association))
}

pub async fn redirect_handler(
    State(state): State<AppState>,
    ShortIdPath(id): ShortIdPath,
) -> Result<Response> {
    let association = state.associations.get(&id).await?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, association.target_url)],
    )
        .into_response())
}

pub async fn update_handler(
    State(state): State<AppState>,
    ShortIdPath(id): ShortIdPath,
    body: Bytes,
) -> Result<StatusCode> {
    let request = parse_request(&body)?;
    state.associations.update(&id, &request.url).await?;

    Ok(StatusCode::OK)
}

pub async fn delete_handler(
    State(state): State<AppState>,
    ShortIdPath(id): ShortIdPath,
) -> Result<StatusCode> {
    state.associations.delete(&id).await?;

    Ok(StatusCode::OK)
}
