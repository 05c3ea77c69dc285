use crate::http::DEFAULT_MAX_BODY_BYTES;
use crate::llm::GatewaySettings;
use anyhow::{bail, Result};
use serde::Deserialize;
use std::time::Duration;

/// Default config file, resolved by the `config` crate with any supported extension
pub const DEFAULT_CONFIG_PATH: &str = "config/meeting-insights";

/// Prefix for environment overrides, e.g. `MEETING_INSIGHTS_LLM__API_KEY`
pub const ENV_PREFIX: &str = "MEETING_INSIGHTS";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,

    /// Request body cap in bytes; transcripts larger than this get 413
    pub max_body_bytes: usize,
}

#[derive(Debug, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load defaults, then the optional file at `path`, then environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "meeting-insights")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 8080)?
            .set_default("service.http.max_body_bytes", DEFAULT_MAX_BODY_BYTES as u64)?
            .set_default("llm.base_url", "https://ai.gateway.lovable.dev/v1")?
            .set_default("llm.model", "google/gemini-2.5-flash")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Gateway settings for startup; fails when no credential is configured
    pub fn gateway_settings(&self) -> Result<GatewaySettings> {
        let api_key = match self.llm.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => bail!(
                "LLM API key is not configured (set llm.api_key or {}_LLM__API_KEY)",
                ENV_PREFIX
            ),
        };

        Ok(GatewaySettings {
            base_url: self.llm.base_url.clone(),
            model: self.llm.model.clone(),
            api_key,
            timeout: self.llm.timeout_secs.map(Duration::from_secs),
        })
    }
}
