//! Error taxonomy for the document generation core.
//!
//! Input problems are rejected before any external call. Provider and
//! validation failures carry enough context for the caller to fix the
//! request; nothing here is retried.

use thiserror::Error;

use crate::provider::GenerationError;

/// A structured model response that did not honor the expected contract.
///
/// Carries the raw model output verbatim: a malformed or truncated score
/// list is worse than an explicit failure for a document meant to inform
/// business decisions, so the caller gets everything needed to diagnose.
#[derive(Debug, Error)]
#[error("validation failed: {reason}")]
pub struct ValidationError {
    pub reason: String,
    pub raw_text: String,
}

/// Top-level error returned by the facade operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Bad request data, e.g. fewer than 2 parties for a power of attorney
    /// or a document kind an operation does not serve.
    #[error("invalid input: {0}")]
    Input(String),

    /// The provider call failed or returned an empty body.
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Structured output did not match the expected schema or cardinality.
    #[error("{0}")]
    Validation(#[from] ValidationError),
}
