use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoaderError, InferenceError};
use crate::application::services::GenerationError;
use crate::domain::ValidationError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of a `/process_project` request, rendered as an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    /// Upstream status and body, forwarded unchanged.
    Upstream { status: StatusCode, body: String },
    BadGateway(String),
    GatewayTimeout(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => *status,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<FileLoaderError> for ApiError {
    fn from(e: FileLoaderError) -> Self {
        match e {
            FileLoaderError::UnsupportedFileType(_) | FileLoaderError::DocumentParse(_) => {
                ApiError::BadRequest(e.to_string())
            }
            FileLoaderError::ExtractionFailed(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<InferenceError> for ApiError {
    fn from(e: InferenceError) -> Self {
        match e {
            InferenceError::MissingCredential(_) => ApiError::Internal(e.to_string()),
            InferenceError::Upstream { status, body } => match StatusCode::from_u16(status) {
                Ok(status) => ApiError::Upstream { status, body },
                Err(_) => ApiError::BadGateway(format!("upstream status {status}: {body}")),
            },
            InferenceError::Timeout => ApiError::GatewayTimeout(e.to_string()),
            InferenceError::RequestFailed(_) | InferenceError::InvalidResponse(_) => {
                ApiError::BadGateway(e.to_string())
            }
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::Validation(e) => e.into(),
            GenerationError::Extraction(e) => e.into(),
            GenerationError::Inference(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Upstream { body, .. } => (status, body).into_response(),
            ApiError::BadRequest(error)
            | ApiError::Internal(error)
            | ApiError::BadGateway(error)
            | ApiError::GatewayTimeout(error) => {
                (status, Json(ErrorResponse { error })).into_response()
            }
        }
    }
}
