//! Gemini REST client implementing the text-generation oracle

use crate::config::LlmConfig;
use crate::error::{Result, ResumeTailorError};
use crate::llm::oracle::TextOracle;
use crate::llm::structured::{parse_structured, StructuredOutput};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// How much raw output to quote back in a MalformedOutput error.
const MALFORMED_PREVIEW_CHARS: usize = 200;

/// Exponent cap keeping the longest retry wait at 64 seconds.
const MAX_BACKOFF_EXPONENT: u32 = 5;

/// Exponential backoff: 2s, 4s, 8s, ... capped so large retry counts
/// cannot overflow the shift.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64 << attempt.min(MAX_BACKOFF_EXPONENT))
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    max_retries: u32,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Reads the API key from the GOOGLE_API_KEY environment variable.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
            ResumeTailorError::Configuration(
                "GOOGLE_API_KEY environment variable not set".to_string(),
            )
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            max_retries: config.max_retries.max(1),
        })
    }

    async fn request_once(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ResumeTailorError::ApiUnavailable(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ResumeTailorError::RateLimited(format!(
                "Gemini API returned 429 for model {}",
                self.model
            )));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ResumeTailorError::ApiUnavailable(format!(
                "Gemini API returned HTTP {}: {}",
                status, detail
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ResumeTailorError::MalformedOutput(e.to_string()))?;

        parsed
            .candidates
            .and_then(|mut candidates| candidates.drain(..).next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .and_then(|mut parts| parts.drain(..).next())
            .and_then(|part| part.text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                ResumeTailorError::MalformedOutput("Empty generation response".to_string())
            })
    }

    async fn generate_with_retries(&self, prompt: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 0..self.max_retries {
            match self.request_once(prompt).await {
                Ok(text) => return Ok(text),
                Err(e @ ResumeTailorError::RateLimited(_))
                | Err(e @ ResumeTailorError::ApiUnavailable(_)) => {
                    if attempt + 1 < self.max_retries {
                        let wait = backoff_delay(attempt);
                        warn!(
                            "Generation attempt {} failed ({}), retrying in {:?}",
                            attempt + 1,
                            e,
                            wait
                        );
                        tokio::time::sleep(wait).await;
                    }
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ResumeTailorError::ApiUnavailable("No generation attempts were made".to_string())
        }))
    }
}

impl TextOracle for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Sending prompt of {} chars to {}", prompt.len(), self.model);
        self.generate_with_retries(prompt).await
    }

    async fn generate_structured(&self, prompt: &str) -> Result<Value> {
        let structured_prompt = format!("{}\n\nRespond in valid JSON format only.", prompt);
        let text = self.generate_with_retries(&structured_prompt).await?;

        match parse_structured(&text) {
            StructuredOutput::Parsed(value) => Ok(value),
            StructuredOutput::Unparseable(raw) => {
                let preview: String = raw.chars().take(MALFORMED_PREVIEW_CHARS).collect();
                Err(ResumeTailorError::MalformedOutput(format!(
                    "Could not extract JSON from generation output: {}",
                    preview
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_grows_exponentially() {
        assert_eq!(backoff_delay(0), Duration::from_secs(2));
        assert_eq!(backoff_delay(1), Duration::from_secs(4));
        assert_eq!(backoff_delay(3), Duration::from_secs(16));
    }

    #[test]
    fn test_backoff_is_capped() {
        assert_eq!(backoff_delay(5), Duration::from_secs(64));
        assert_eq!(backoff_delay(64), Duration::from_secs(64));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_secs(64));
    }
}
