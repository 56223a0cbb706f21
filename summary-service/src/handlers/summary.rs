use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::models::{SummaryRequest, SummaryResponse, PROMPT_REQUIRED, SUMMARY_GENERATION};
use crate::startup::AppState;
use service_core::error::AppError;

/// `POST /api/generate-summary`
///
/// Makes exactly one provider call per valid request. Every provider failure
/// is logged and returned as the same 500 payload with the failure message in
/// `details`.
#[tracing::instrument(skip(state, payload))]
pub async fn generate_summary(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let prompt = validated_prompt(payload)?;

    match state
        .text_provider
        .generate(&prompt, &SUMMARY_GENERATION)
        .await
    {
        Ok(response) => {
            tracing::info!(
                prompt_len = prompt.len(),
                summary_len = response.text.len(),
                "Summary generated"
            );
            Ok(Json(SummaryResponse {
                summary: response.text,
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, kind = ?e, "Error calling Gemini API");
            Err(AppError::UpstreamFailure(e.to_string()))
        }
    }
}

/// Any method other than POST on the summary route.
pub async fn method_not_allowed() -> impl IntoResponse {
    ([(header::ALLOW, "POST")], AppError::MethodNotAllowed)
}

fn validated_prompt(payload: Result<Json<SummaryRequest>, JsonRejection>) -> Result<String, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Unreadable summary request body");
        AppError::BadRequest(PROMPT_REQUIRED.to_string())
    })?;

    request.validate().map_err(|e| {
        tracing::debug!(error = %e, "Summary request failed validation");
        AppError::BadRequest(PROMPT_REQUIRED.to_string())
    })?;

    request
        .prompt
        .ok_or_else(|| AppError::BadRequest(PROMPT_REQUIRED.to_string()))
}
