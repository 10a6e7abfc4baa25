//! Word-info lookups through the Gemini structured-output API.

use flashcard_core::{render_prompt, response_schema, WordInfo};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::WordInfoSource;
use crate::error::Result;

/// Gemini errors.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Gemini error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Gemini returned no content")]
    EmptyResponse,

    #[error("Parse error: {0}")]
    Parse(String),
}

// === API Request/Response Types ===

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the `generateContent` endpoint of one model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    language: String,
}

impl GeminiClient {
    pub fn new(
        client: Client,
        base_url: &str,
        model: impl Into<String>,
        api_key: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            language: language.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Ask the model for the meaning, pinyin and per-character glosses of `word`.
    pub async fn generate_word_info(&self, word: &str) -> Result<WordInfo, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(render_prompt(word, &self.language)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let url = self.endpoint();
        tracing::debug!("POST {} for {}", url, word);

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        let response: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        parse_word_info(response)
    }
}

impl WordInfoSource for GeminiClient {
    async fn word_info(&self, word: &str) -> Result<WordInfo> {
        Ok(self.generate_word_info(word).await?)
    }
}

/// Pull the JSON answer out of the first candidate and decode it.
fn parse_word_info(response: GenerateContentResponse) -> Result<WordInfo, GeminiError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .ok_or(GeminiError::EmptyResponse)?;

    if text.trim().is_empty() {
        return Err(GeminiError::EmptyResponse);
    }

    serde_json::from_str(&text).map_err(|e| GeminiError::Parse(e.to_string()))
}
