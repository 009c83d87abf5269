use std::time::Duration;

use crate::application::ports::{InferenceClient, InferenceError};

/// Offline stand-in for the inference backend, used in scaffold mode.
pub struct MockInferenceClient {
    delay: Duration,
}

impl MockInferenceClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(format!(
            "Scaffold response. The prompt was {} characters long and was not sent to any model.",
            prompt.chars().count()
        ))
    }
}
