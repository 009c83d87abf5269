use async_trait::async_trait;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("{0} is not set.")]
    MissingCredential(&'static str),
    #[error("inference backend returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("inference request timed out")]
    Timeout,
    #[error("inference request failed: {0}")]
    RequestFailed(String),
    #[error("invalid inference response: {0}")]
    InvalidResponse(String),
}

impl InferenceError {
    /// Upstream HTTP status, when the backend actually answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            InferenceError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
