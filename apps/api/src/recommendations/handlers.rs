//! Axum route handlers for the recommendation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::recommendations::extract::{extract_json, Extraction};
use crate::recommendations::models::{RecommendationRequest, RecommendationResult};
use crate::recommendations::prompt::build_prompt;
use crate::state::AppState;

/// POST /
///
/// Validates the payload, renders the prompt, performs one upstream call and
/// returns `{ "data": ... }`. An extracted model object passes through
/// verbatim. Model output that defeats JSON extraction degrades to an
/// empty-arrays result carrying the raw text; that path is never an error.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    request: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    // Decode failures go through the same error envelope as everything else,
    // not the extractor's plain-text rejection.
    let Json(request) = request.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    // Both checks precede the upstream call; rejection has no side effects.
    if request.user_profile.is_none() {
        return Err(AppError::MissingUserProfile);
    }
    let llm = state.llm.as_ref().ok_or(AppError::MissingApiKey)?;

    let prompt = build_prompt(&request);
    debug!("recommendation prompt rendered ({} chars)", prompt.len());

    let response = llm.call(&prompt).await?;
    let text = response.text().ok_or(LlmError::EmptyContent)?;

    let data = match extract_json(text) {
        Extraction::BraceSpan(value) | Extraction::WholeText(value) => value,
        Extraction::Unparsable(raw) => {
            debug!("model reply had no extractable JSON; returning degraded result");
            serde_json::to_value(RecommendationResult::degraded(raw))
                .map_err(|e| AppError::Internal(e.into()))?
        }
    };

    Ok(Json(json!({ "data": data })))
}

/// OPTIONS /
///
/// Preflight short-circuit: 200 with no body. CORS headers are attached by
/// the router-wide layer.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}
