//! Generation Invoker — one capability abstracting two provider protocols.
//!
//! ARCHITECTURAL RULE: no other module may talk to a text-generation
//! provider directly. All model calls go through `TextGenerator`, so the
//! rest of the pipeline is provider-agnostic. Providers are selected by
//! configuration at startup, not at each call site.

mod gemini;
mod openai;

pub use gemini::{GeminiClient, GEMINI_MODEL};
pub use openai::{OpenAiClient, OPENAI_MODEL};

use async_trait::async_trait;
use thiserror::Error;

/// A failed provider call. Never retried; the facade surfaces it to the
/// caller as-is.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider returned empty content")]
    EmptyContent,
}

/// One text-generation call: prompt in, text out.
///
/// Carried as `Arc<dyn TextGenerator>` by the facade. There is no
/// cancellation primitive; a call that has started blocks until the
/// provider responds, errors, or the client timeout fires.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<String, GenerationError>;
}
