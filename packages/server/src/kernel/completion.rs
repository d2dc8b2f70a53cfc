use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Text completion against the generative-model API.
#[async_trait]
pub trait BaseCompletionService: Send + Sync {
    /// True when a real model backs this service.
    fn is_configured(&self) -> bool;

    /// Complete a prompt, returning the raw model text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Gemini client speaking the generateContent REST API.
pub struct GeminiClient {
    api_key: String,
    model: String,
    fallback_model: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

const GENERATE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

impl GeminiClient {
    pub fn new(api_key: String, model: String, fallback_model: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_key,
            model,
            fallback_model,
            client,
        })
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!("{GENERATE_URL}/{model}:generateContent?key={}", self.api_key);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send generateContent request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error {}: {}", status, body);
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse generateContent response")?;

        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            anyhow::bail!("Empty response from Gemini API");
        }
        Ok(text)
    }
}

#[async_trait]
impl BaseCompletionService for GeminiClient {
    fn is_configured(&self) -> bool {
        true
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        match self.generate(&self.model, prompt).await {
            Ok(text) => Ok(text),
            Err(err) => {
                tracing::warn!(
                    model = %self.model,
                    fallback = %self.fallback_model,
                    error = %err,
                    "Primary model failed, retrying with fallback model"
                );
                self.generate(&self.fallback_model, prompt).await
            }
        }
    }
}

/// No-op completion service for when no model API key is configured.
pub struct NoopCompletionService;

#[async_trait]
impl BaseCompletionService for NoopCompletionService {
    fn is_configured(&self) -> bool {
        false
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        tracing::warn!("NoopCompletionService: complete called but no model API key configured");
        anyhow::bail!("Summarization is not configured")
    }
}
