use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured analysis of a single transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalysisResult {
    /// Free-text summary of the discussion
    pub summary: String,

    /// Key decisions and action items, in the order the model produced them
    pub key_points: Vec<String>,

    /// Diagram in Mermaid notation
    pub mermaid_code: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReplyParseError {
    #[error("reply is not a JSON analysis and contains no fenced block")]
    NoFencedBlock,
    #[error("reply contains {0} fenced blocks, expected exactly one")]
    MultipleFencedBlocks(usize),
    #[error("fenced block is not terminated")]
    UnterminatedFence,
    #[error("fenced block does not match the analysis schema: {0}")]
    InvalidBlock(String),
}

impl AnalysisResult {
    /// Parse a model reply into an analysis.
    ///
    /// The reply is first read as a bare JSON object. If that fails, it must
    /// contain exactly one fenced code block (tagged `json` or untagged) whose
    /// body is the JSON object.
    pub fn from_reply(reply: &str) -> Result<Self, ReplyParseError> {
        if let Ok(result) = serde_json::from_str::<Self>(reply.trim()) {
            return Ok(result);
        }

        let blocks = fenced_blocks(reply)?;
        match blocks.as_slice() {
            [] => Err(ReplyParseError::NoFencedBlock),
            [block] => serde_json::from_str::<Self>(block)
                .map_err(|e| ReplyParseError::InvalidBlock(e.to_string())),
            many => Err(ReplyParseError::MultipleFencedBlocks(many.len())),
        }
    }
}

/// Collect the bodies of all ``` fenced blocks, stripping a `json` tag.
fn fenced_blocks(text: &str) -> Result<Vec<&str>, ReplyParseError> {
    const FENCE: &str = "```";

    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(FENCE) {
        let after_open = &rest[start + FENCE.len()..];
        let body = after_open.strip_prefix("json").unwrap_or(after_open);

        let end = body.find(FENCE).ok_or(ReplyParseError::UnterminatedFence)?;
        blocks.push(body[..end].trim());
        rest = &body[end + FENCE.len()..];
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = r#"{"summary":"s","keyPoints":["a","b"],"mermaidCode":"graph TD; A-->B;"}"#;

    fn expected() -> AnalysisResult {
        AnalysisResult {
            summary: "s".to_string(),
            key_points: vec!["a".to_string(), "b".to_string()],
            mermaid_code: "graph TD; A-->B;".to_string(),
        }
    }

    #[test]
    fn test_bare_json_with_surrounding_whitespace() {
        let reply = format!("\n  {}\n", BARE);
        assert_eq!(AnalysisResult::from_reply(&reply).unwrap(), expected());
    }

    #[test]
    fn test_json_tagged_fence_matches_bare() {
        let reply = format!("Here you go:\n```json\n{}\n```\nThanks", BARE);
        assert_eq!(
            AnalysisResult::from_reply(&reply).unwrap(),
            AnalysisResult::from_reply(BARE).unwrap()
        );
    }

    #[test]
    fn test_untagged_fence() {
        let reply = format!("```\n{}\n```", BARE);
        assert_eq!(AnalysisResult::from_reply(&reply).unwrap(), expected());
    }

    #[test]
    fn test_two_fenced_blocks_rejected() {
        let reply = format!("```json\n{}\n```\n```json\n{}\n```", BARE, BARE);
        assert_eq!(
            AnalysisResult::from_reply(&reply),
            Err(ReplyParseError::MultipleFencedBlocks(2))
        );
    }

    #[test]
    fn test_unterminated_fence_rejected() {
        let reply = format!("```json\n{}", BARE);
        assert_eq!(
            AnalysisResult::from_reply(&reply),
            Err(ReplyParseError::UnterminatedFence)
        );
    }

    #[test]
    fn test_plain_prose_rejected() {
        assert_eq!(
            AnalysisResult::from_reply("I could not analyze this transcript."),
            Err(ReplyParseError::NoFencedBlock)
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let reply = r#"{"summary":"s","keyPoints":[],"mermaidCode":"x","extra":1}"#;
        assert!(AnalysisResult::from_reply(reply).is_err());
    }

    #[test]
    fn test_missing_field_inside_fence_rejected() {
        let reply = "```json\n{\"summary\":\"s\",\"keyPoints\":[]}\n```";
        assert!(matches!(
            AnalysisResult::from_reply(reply),
            Err(ReplyParseError::InvalidBlock(_))
        ));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_string(&expected()).unwrap();
        assert_eq!(json, BARE);
    }
}
