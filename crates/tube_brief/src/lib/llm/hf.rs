use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::Summarizer;

/// Generation parameters sent with every summarization request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParams {
    pub min_length: u32,
    pub max_length: u32,
    // f64 so the serialized body carries 0.7 exactly
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        GenerationParams {
            min_length: 100,
            max_length: 300,
            temperature: 0.7,
        }
    }
}

/// Explicit summarizer configuration, passed in at construction rather
/// than read from process-wide state.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub api_key: String,
    pub model: String,
    pub generation: GenerationParams,
}

impl SummarizerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        SummarizerConfig {
            api_key: api_key.into(),
            model: HfInferenceClient::DEFAULT_MODEL.into(),
            generation: GenerationParams::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HfError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Client for the Hugging Face hosted inference endpoint.
pub struct HfInferenceClient {
    client: Client,
    config: SummarizerConfig,
    base_url: String,
}

impl HfInferenceClient {
    pub const DEFAULT_MODEL: &'static str = "facebook/bart-large-cnn";

    // The source behavior had no timeout; a bounded one keeps a stuck
    // endpoint from blocking a stage forever.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(config: SummarizerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            base_url: "https://router.huggingface.co/hf-inference/models".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_summarize_request(&self, chunk: &str) -> Result<Option<String>, HfError> {
        let body = serde_json::json!({
            "inputs": chunk,
            "parameters": self.config.generation,
        });

        let resp = self
            .client
            .post(format!("{}/{}", self.base_url, self.config.model))
            .bearer_auth(&self.config.api_key)
            .timeout(Self::REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(HfError::Api { status, message });
        }

        let value = resp.json::<Value>().await?;
        Ok(extract_summary_text(&value).map(str::to_owned))
    }
}

/// The endpoint is expected to answer with a list whose first element
/// carries `summary_text`. Anything else means no summary for the chunk.
fn extract_summary_text(value: &Value) -> Option<&str> {
    value
        .get(0)
        .and_then(|item| item.get("summary_text"))
        .and_then(Value::as_str)
}

impl Summarizer for HfInferenceClient {
    const SUMMARIZER_MODEL: &'static str = HfInferenceClient::DEFAULT_MODEL;
    type Error = HfError;

    async fn summarize_chunk(&self, chunk: &str) -> Result<Option<String>, Self::Error> {
        self.send_summarize_request(chunk)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize chunk"))
    }
}
