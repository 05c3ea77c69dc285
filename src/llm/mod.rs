//! Chat-completion gateway used to run transcript analyses
//!
//! - `ChatCompletion` is the seam the analyzer calls through
//! - `GatewayClient` is the HTTPS implementation backed by reqwest

mod client;
mod messages;

pub use client::{GatewayClient, GatewaySettings};
pub use messages::ChatMessage;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("LLM API credential is not configured")]
    MissingCredential,
    #[error("upstream rate limit exceeded")]
    RateLimited,
    #[error("upstream requires payment")]
    PaymentRequired,
    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream response has no choices[0].message.content")]
    MalformedEnvelope,
}

/// Chat-completion backend
///
/// Implementations:
/// - `GatewayClient`: OpenAI-compatible HTTPS gateway
/// - test fakes that record calls and return canned replies
#[async_trait::async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Send the messages and return the text of the first choice
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, UpstreamError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
