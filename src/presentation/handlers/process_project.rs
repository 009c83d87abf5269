use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, InferenceClient};
use crate::domain::{GenerationRequest, UploadedDocument, ValidationError};
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Serialize)]
pub struct ProcessProjectResponse {
    pub status: &'static str,
    pub project_name: String,
    pub output: String,
    pub guide_type: String,
    pub content: String,
}

#[derive(Default)]
struct ProjectForm {
    file: Option<(String, Vec<u8>)>,
    project_name: Option<String>,
    output: Option<String>,
    guide_type: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<ProjectForm, ApiError> {
    let mut form = ProjectForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {e}")))?;
                form.file = Some((filename, data.to_vec()));
            }
            "project_name" | "output" | "guide_type" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read {name}: {e}")))?;
                match name.as_str() {
                    "project_name" => form.project_name = Some(value),
                    "output" => form.output = Some(value),
                    _ => form.guide_type = Some(value),
                }
            }
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_project_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    F: FileLoader + ?Sized + 'static,
    L: InferenceClient + ?Sized + 'static,
{
    let form = read_form(multipart).await.inspect_err(|e| {
        tracing::warn!(error = ?e, "Malformed multipart request");
    })?;

    let project_name = form
        .project_name
        .ok_or(ValidationError::MissingField("project_name"))?;
    let output = form.output.ok_or(ValidationError::MissingField("output"))?;

    let request = GenerationRequest::parse(project_name, &output, form.guide_type.as_deref())?;

    let (filename, data) = form.file.ok_or(ValidationError::MissingField("file"))?;
    let document = UploadedDocument::new(filename, data.len() as u64)?;

    tracing::debug!(
        filename = %document.filename,
        bytes = document.size_bytes,
        output = %request.output,
        "Processing brochure upload"
    );

    let content = state
        .generation_service
        .generate(&request, &document, &data)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Brochure processing failed");
            ApiError::from(e)
        })?;

    Ok((
        StatusCode::OK,
        Json(ProcessProjectResponse {
            status: "success",
            project_name: request.project_name,
            output: request.output.to_string(),
            guide_type: request.guide_type.to_string(),
            content,
        }),
    ))
}
