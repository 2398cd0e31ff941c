use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;

use crate::assets;
use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{decode, parser};

pub async fn form_page(State(state): State<SharedState>) -> Response {
    assets::serve_file(&state.config.public_dir, assets::FORM_PAGE).await
}

/// Decode the posted fields, store them as one submission and answer with the
/// confirmation page.
pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let raw = parser::parse_request(&headers, body)
        .await
        .map_err(AppError::Decode)?;
    let submission = decode::decode(&raw).map_err(AppError::Decode)?;

    let id = state
        .store
        .insert(&submission)
        .await
        .map_err(AppError::Save)?;
    tracing::info!(%id, "Response saved successfully");

    Ok(assets::serve_file(&state.config.public_dir, assets::CONFIRMATION_PAGE).await)
}
