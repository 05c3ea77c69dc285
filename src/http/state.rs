use super::routes::DEFAULT_MAX_BODY_BYTES;
use crate::analysis::TranscriptAnalyzer;
use crate::llm::ChatCompletion;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Analysis pipeline (immutable, shared across requests)
    pub analyzer: Arc<TranscriptAnalyzer>,

    /// Largest accepted request body; larger bodies get 413
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(llm: Arc<dyn ChatCompletion>) -> Self {
        Self {
            analyzer: Arc::new(TranscriptAnalyzer::new(llm)),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
