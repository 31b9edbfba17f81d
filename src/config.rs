use anyhow::{Context, Result};

/// Configuration loaded from environment variables, resolved once at
/// startup. A missing credential is fatal here, never per-request.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub openai_api_key: String,
    /// Upper bound in seconds on a single provider call. The only
    /// protection against a provider that never responds.
    pub request_timeout_secs: u64,
}

const DEFAULT_TIMEOUT_SECS: u64 = 120;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
