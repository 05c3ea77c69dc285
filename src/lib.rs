pub mod analysis;
pub mod config;
pub mod http;
pub mod llm;

pub use analysis::{AnalysisError, AnalysisResult, TranscriptAnalyzer};
pub use config::Config;
pub use http::{create_router, AppState};
pub use llm::{ChatCompletion, ChatMessage, GatewayClient, GatewaySettings, UpstreamError};
