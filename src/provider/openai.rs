//! OpenAI backend — serves the analysis family: company profiles and
//! project evaluations.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationError, TextGenerator};

const OPENAI_API_BASE: &str = "https://api.openai.com";

/// The model used for all analysis-family generations.
/// Intentionally hardcoded to prevent accidental drift.
pub const OPENAI_MODEL: &str = "gpt-4o-mini";

const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f32 = 0.3;
const DEFAULT_SYSTEM: &str =
    "You write clear, professional proposal documents and analyses.";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Client for the OpenAI chat completions endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    system: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url: OPENAI_API_BASE.to_string(),
            system: DEFAULT_SYSTEM.to_string(),
        }
    }

    /// Points the client at a different endpoint. Test hook for mock servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the fixed system message for every call made by this client.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn invoke(&self, prompt: &str) -> Result<String, GenerationError> {
        let request_body = ChatCompletionRequest {
            model: OPENAI_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's own message when the error envelope parses
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw = response.text().await?;
        let body: ChatCompletionResponse = serde_json::from_str(&raw)?;

        let text = body
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(GenerationError::EmptyContent);
        }

        debug!("OpenAI call succeeded: {} chars", text.len());
        Ok(text)
    }
}
