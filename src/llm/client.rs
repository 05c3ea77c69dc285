use super::messages::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use super::{ChatCompletion, UpstreamError};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{error, info};

/// Connection settings for the chat-completion gateway
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Base URL, e.g. "https://ai.gateway.lovable.dev/v1"
    pub base_url: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Bearer credential
    pub api_key: String,

    /// Per-request timeout; None keeps the HTTP client's default
    pub timeout: Option<Duration>,
}

pub struct GatewayClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GatewayClient {
    /// Build a client, rejecting a blank credential up front
    pub fn new(settings: GatewaySettings) -> Result<Self, UpstreamError> {
        if settings.api_key.trim().is_empty() {
            return Err(UpstreamError::MissingCredential);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let endpoint = format!("{}/chat/completions", settings.base_url.trim_end_matches('/'));
        info!("LLM gateway: {} (model {})", endpoint, settings.model);

        Ok(Self {
            client,
            endpoint,
            model: settings.model,
            api_key: settings.api_key,
        })
    }
}

#[async_trait::async_trait]
impl ChatCompletion for GatewayClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, UpstreamError> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => UpstreamError::PaymentRequired,
                _ => {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "<unreadable body>".to_string());
                    error!("AI gateway error: {} {}", status, body);
                    UpstreamError::Status {
                        status: status.as_u16(),
                        body,
                    }
                }
            });
        }

        let content = match response.json::<ChatCompletionResponse>().await {
            Ok(envelope) => envelope.into_content(),
            Err(e) => {
                error!("AI gateway returned an unreadable envelope: {}", e);
                return Err(UpstreamError::MalformedEnvelope);
            }
        };

        content.ok_or_else(|| {
            error!("AI gateway envelope has no choices[0].message.content");
            UpstreamError::MalformedEnvelope
        })
    }

    fn name(&self) -> &str {
        "gateway"
    }
}
