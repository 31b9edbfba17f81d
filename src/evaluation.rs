//! Response Validator/Parser for the project-evaluation document kind.
//!
//! The model is instructed to return a fixed JSON schema but may wrap it
//! in prose or code fences, truncate the score list, or step outside the
//! 0-100 range. Extraction is tolerant about the wrapping and strict about
//! the shape: any violation is a typed failure carrying the raw text,
//! never a partial result or a silent coercion.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Relevance verdict for one past project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEvaluation {
    pub title: String,
    /// 0-100. Negative values already fail deserialization; the upper
    /// bound is checked after parsing.
    pub score: u32,
    pub rationale: String,
}

/// A model-suggested project idea to strengthen the proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

/// Validated output of a project-evaluation request. Fields the model
/// declares beyond this schema are ignored by design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub evaluations: Vec<ProjectEvaluation>,
    pub additional_recommendations: Vec<Recommendation>,
}

/// The prompt asks for exactly three recommendations; fewer or more means
/// the response did not honor the contract.
const EXPECTED_RECOMMENDATIONS: usize = 3;

/// Parses raw model output into an `EvaluationResult` and enforces the
/// cardinality and range invariants. `expected_evaluations` is the number
/// of past projects the caller supplied.
pub fn parse_evaluation(
    raw_text: &str,
    expected_evaluations: usize,
) -> Result<EvaluationResult, ValidationError> {
    let json = extract_json_object(raw_text)
        .ok_or_else(|| invalid(raw_text, "no JSON object found in model output"))?;

    let result: EvaluationResult = serde_json::from_str(json)
        .map_err(|e| invalid(raw_text, format!("JSON does not match the evaluation schema: {e}")))?;

    if result.evaluations.len() != expected_evaluations {
        return Err(invalid(
            raw_text,
            format!(
                "expected {expected_evaluations} evaluations, got {}",
                result.evaluations.len()
            ),
        ));
    }

    for evaluation in &result.evaluations {
        if evaluation.score > 100 {
            return Err(invalid(
                raw_text,
                format!(
                    "score {} for '{}' is outside 0-100",
                    evaluation.score, evaluation.title
                ),
            ));
        }
    }

    if result.additional_recommendations.len() != EXPECTED_RECOMMENDATIONS {
        return Err(invalid(
            raw_text,
            format!(
                "expected exactly {EXPECTED_RECOMMENDATIONS} additional recommendations, got {}",
                result.additional_recommendations.len()
            ),
        ));
    }

    Ok(result)
}

fn invalid(raw_text: &str, reason: impl Into<String>) -> ValidationError {
    ValidationError {
        reason: reason.into(),
        raw_text: raw_text.to_string(),
    }
}

/// Strips code fences, then isolates the outermost `{ … }` span so JSON
/// wrapped in prose still parses. Returns `None` when no balanced span
/// exists; a span that is not valid JSON fails at deserialization instead
/// of being guessed at.
fn extract_json_object(text: &str) -> Option<&str> {
    let text = strip_json_fences(text);
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match stripped {
        Some(inner) => inner
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or_else(|| inner.trim_start()),
        None => text,
    }
}
