//! API request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    error::ExplainError,
    explain::{Explainer, ExplanationResult, ImageExplanationBody, TextExplanationBody},
};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub explainer: Explainer,
}

/// Explain a typed math problem
pub async fn explain_math(
    State(state): State<AppState>,
    body: Result<Json<TextExplanationBody>, JsonRejection>,
) -> Result<Json<ExplanationResult>, ExplainError> {
    let Json(body) = body.map_err(reject_body)?;
    let span = info_span!("explain_math", request_id = %Uuid::new_v4());

    state.explainer.explain_text(body).instrument(span).await.map(Json)
}

/// Explain a photographed or screenshotted math problem
pub async fn explain_math_image(
    State(state): State<AppState>,
    body: Result<Json<ImageExplanationBody>, JsonRejection>,
) -> Result<Json<ExplanationResult>, ExplainError> {
    let Json(body) = body.map_err(reject_body)?;
    let span = info_span!("explain_math_image", request_id = %Uuid::new_v4());

    state.explainer.explain_image(body).instrument(span).await.map(Json)
}

/// A body that does not deserialize has no usable input fields
fn reject_body(rejection: JsonRejection) -> ExplainError {
    warn!("Rejected request body: {}", rejection.body_text());
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ExplainError::PayloadTooLarge;
    }
    ExplainError::MissingInput(format!("Invalid request body: {}", rejection.body_text()))
}

/// Service banner
pub async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "Math Explainer",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Liveness handler, always returns 200
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({"status": "alive"}))
}
