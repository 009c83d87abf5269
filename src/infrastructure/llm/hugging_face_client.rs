use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::application::ports::{InferenceClient, InferenceError};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::InferenceSettings;

const CREDENTIAL_NAME: &str = "HF_TOKEN";

/// Client for the Hugging Face hosted inference router.
pub struct HuggingFaceClient {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl HuggingFaceClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_token: &str,
        timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceError::RequestFailed(format!("client build: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), model),
            api_token: api_token.trim().to_string(),
        })
    }

    pub fn from_settings(settings: &InferenceSettings) -> Result<Self, InferenceError> {
        Self::new(
            &settings.base_url,
            &settings.model,
            &settings.api_token,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Pulls `generated_text` out of the usual `[{"generated_text": ...}]` shape.
/// Any other JSON body is handed back serialised as-is.
fn extract_generated_text(body: Value) -> String {
    let generated = body
        .as_array()
        .and_then(|items| items.first())
        .and_then(Value::as_object)
        .and_then(|first| first.get("generated_text"));

    match generated {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => body.to_string(),
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    #[tracing::instrument(skip(self, prompt), fields(endpoint = %self.endpoint))]
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        if self.api_token.is_empty() {
            return Err(InferenceError::MissingCredential(CREDENTIAL_NAME));
        }

        tracing::debug!(prompt = %sanitize_prompt(prompt), "Sending prompt to inference backend");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::Timeout
                } else {
                    InferenceError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Inference backend returned an error");
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let raw_bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                InferenceError::Timeout
            } else {
                InferenceError::RequestFailed(format!("read body: {e}"))
            }
        })?;

        let body: Value = serde_json::from_slice(&raw_bytes).map_err(|e| {
            tracing::error!(
                raw_response = %String::from_utf8_lossy(&raw_bytes),
                "Failed to parse inference response"
            );
            InferenceError::InvalidResponse(e.to_string())
        })?;

        Ok(extract_generated_text(body))
    }
}
