use super::result::ReplyParseError;
use crate::llm::UpstreamError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Transcript is required")]
    MissingTranscript,
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("Failed to parse AI response: {0}")]
    Parse(#[from] ReplyParseError),
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AnalysisError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalysisError::MissingTranscript | AnalysisError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AnalysisError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AnalysisError::Upstream(UpstreamError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            AnalysisError::Upstream(UpstreamError::PaymentRequired) => StatusCode::PAYMENT_REQUIRED,
            AnalysisError::Upstream(_) | AnalysisError::Parse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message; upstream detail stays in the logs
    pub fn public_message(&self) -> &'static str {
        match self {
            AnalysisError::MissingTranscript => "Transcript is required",
            AnalysisError::InvalidRequest(_) => "Invalid request body",
            AnalysisError::PayloadTooLarge => "Request body too large",
            AnalysisError::Upstream(UpstreamError::MissingCredential) => {
                "Server configuration error"
            }
            AnalysisError::Upstream(UpstreamError::RateLimited) => {
                "Rate limit exceeded. Please try again later."
            }
            AnalysisError::Upstream(UpstreamError::PaymentRequired) => {
                "Payment required. Please add credits to your workspace."
            }
            AnalysisError::Upstream(_) => "AI Gateway error",
            AnalysisError::Parse(_) => "Failed to parse AI response",
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.public_message().to_string(),
            }),
        )
            .into_response()
    }
}
