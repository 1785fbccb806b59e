//! Structured output parsing.
//!
//! Turns the model's raw text into a [`ClassificationResult`]. Models often
//! wrap JSON in markdown fences or add a sentence around it, so the parser
//! looks for the outermost object before deserializing.

use crate::category::ClassificationResult;
use crate::error::{ClassifierError, Result};

/// Longest excerpt of model output kept in a parse error.
const MAX_EXCERPT_CHARS: usize = 200;

/// Parses raw model output into a classification result.
pub fn parse_classification(raw: &str) -> Result<ClassificationResult> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClassifierError::Parse("model output is empty".to_string()));
    }

    let object = extract_object(trimmed).ok_or_else(|| {
        ClassifierError::Parse(format!(
            "no JSON object found in completion: {}",
            excerpt(trimmed)
        ))
    })?;

    serde_json::from_str::<ClassificationResult>(object).map_err(|e| {
        ClassifierError::Parse(format!(
            "invalid json output: {} (completion: {})",
            e,
            excerpt(trimmed)
        ))
    })
}

/// Returns the slice from the first `{` to the last `}`.
fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
    cut.push_str("...");
    cut
}
