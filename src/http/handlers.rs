use super::state::AppState;
use crate::analysis::{AnalysisError, DEFAULT_DIAGRAM_TYPE};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub transcript: Option<String>,

    /// Diagram style hint, passed through to the prompt
    pub diagram_type: Option<String>,
}

/// POST /analyze-transcript
/// Summarize a transcript and generate a diagram
pub async fn analyze_transcript(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Rejected oversized request body: {}", rejection.body_text());
            return AnalysisError::PayloadTooLarge.into_response();
        }
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            return AnalysisError::InvalidRequest(rejection.body_text()).into_response();
        }
    };

    let transcript = req.transcript.unwrap_or_default();
    let diagram_type = req
        .diagram_type
        .unwrap_or_else(|| DEFAULT_DIAGRAM_TYPE.to_string());

    match state.analyzer.analyze(&transcript, &diagram_type).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            if matches!(e, AnalysisError::MissingTranscript) {
                warn!("Rejected request without transcript");
            }
            e.into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
