//! Transcript analysis pipeline
//!
//! - `prompt`: system instruction for the requested diagram style
//! - `result`: the `AnalysisResult` record and the reply parser
//! - `TranscriptAnalyzer`: validation, the upstream call and parsing

mod analyzer;
mod error;
pub mod prompt;
mod result;

pub use analyzer::TranscriptAnalyzer;
pub use error::{AnalysisError, ErrorResponse};
pub use prompt::DEFAULT_DIAGRAM_TYPE;
pub use result::{AnalysisResult, ReplyParseError};
