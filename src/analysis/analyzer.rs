use super::error::AnalysisError;
use super::prompt::system_prompt;
use super::result::AnalysisResult;
use crate::llm::{ChatCompletion, ChatMessage};
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};

/// Runs the transcript → prompt → completion → parse pipeline
#[derive(Clone)]
pub struct TranscriptAnalyzer {
    llm: Arc<dyn ChatCompletion>,
}

impl TranscriptAnalyzer {
    pub fn new(llm: Arc<dyn ChatCompletion>) -> Self {
        Self { llm }
    }

    /// Analyze a transcript, making exactly one upstream call.
    ///
    /// A blank transcript is rejected before anything is sent.
    pub async fn analyze(
        &self,
        transcript: &str,
        diagram_type: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        if transcript.trim().is_empty() {
            return Err(AnalysisError::MissingTranscript);
        }

        let request_id = uuid::Uuid::new_v4();
        let span = info_span!("analysis", %request_id, diagram_type);

        async move {
            info!(
                "Analyzing transcript ({} chars) via {}",
                transcript.chars().count(),
                self.llm.name()
            );

            let messages = vec![
                ChatMessage::system(system_prompt(diagram_type)),
                ChatMessage::user(transcript),
            ];

            let reply = self.llm.complete(messages).await.map_err(|e| {
                let err = AnalysisError::from(e);
                warn!("Upstream call failed, responding {}", err.status());
                err
            })?;

            let result = AnalysisResult::from_reply(&reply).map_err(|e| {
                error!("Failed to parse AI response: {}", e);
                AnalysisError::from(e)
            })?;

            info!("Analysis complete ({} key points)", result.key_points.len());
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
