//! Hugging Face Inference API client for the generative fallback.
//!
//! Wraps the text-generation endpoint behind a single call:
//! `generate(prompt) -> text`. The returned text is untrusted; sanitation
//! lives with the engine, not here. Like the catalog client, the token is
//! optional and its absence is a normal, non-fatal state.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default instruction model used for chat completion.
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Bounded generation keeps replies short and limits mid-sentence cutoffs.
const MAX_NEW_TOKENS: u32 = 100;
const TEMPERATURE: f32 = 0.7;
const REPETITION_PENALTY: f32 = 1.2;

/// Errors from the generation endpoint.
#[derive(Error, Debug)]
pub enum HfError {
    #[error("Hugging Face API token is not configured")]
    MissingToken,

    #[error("request to Hugging Face failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Hugging Face returned HTTP {status}")]
    Status { status: StatusCode },

    #[error("Hugging Face returned no completion")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    repetition_penalty: f32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    generated_text: String,
}

/// Client for the Hugging Face text-generation inference endpoint.
#[derive(Debug, Clone)]
pub struct HfClient {
    http: Client,
    base_url: String,
    token: Option<String>,
    model: String,
}

impl HfClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_model(token, DEFAULT_MODEL)
    }

    pub fn with_model(token: Option<String>, model: impl Into<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        HfClient {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
            model: model.into(),
        }
    }

    /// Whether an API token is configured; without one the caller skips the
    /// generative path entirely.
    pub fn has_credentials(&self) -> bool {
        self.token.is_some()
    }

    /// Generate a completion for the prompt. The response is raw model
    /// output; callers must sanitize before showing it to a user.
    pub async fn generate(&self, prompt: &str) -> Result<String, HfError> {
        let token = self.token.as_deref().ok_or(HfError::MissingToken)?;
        let url = format!("{}/{}", self.base_url, self.model);

        let request = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                repetition_penalty: REPETITION_PENALTY,
                return_full_text: false,
            },
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(HfError::Status {
                status: response.status(),
            });
        }

        let completions: Vec<GenerationResponse> = response.json().await?;
        debug!("Hugging Face returned {} completions", completions.len());
        completions
            .into_iter()
            .next()
            .map(|c| c.generated_text)
            .ok_or(HfError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = GenerationRequest {
            inputs: "hola",
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                repetition_penalty: REPETITION_PENALTY,
                return_full_text: false,
            },
        };
        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(body["inputs"], "hola");
        assert_eq!(body["parameters"]["max_new_tokens"], 100);
        assert_eq!(body["parameters"]["return_full_text"], false);
    }

    #[test]
    fn test_completion_deserializes() {
        let json = r#"[{"generated_text": "¡Claro!"}]"#;
        let completions: Vec<GenerationResponse> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(completions[0].generated_text, "¡Claro!");
    }

    #[tokio::test]
    async fn test_missing_token_is_an_error_not_a_call() {
        let client = HfClient::new(None);
        assert!(!client.has_credentials());
        let result = client.generate("hola").await;
        assert!(matches!(result, Err(HfError::MissingToken)));
    }
}
