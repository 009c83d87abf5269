use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, InferenceClient, InferenceError};
use crate::domain::{GenerationRequest, UploadedDocument, ValidationError};

use super::prompt_builder::build_prompt;

/// Runs one brochure through extraction, prompt assembly and inference.
pub struct GenerationService<F, L>
where
    F: FileLoader + ?Sized,
    L: InferenceClient + ?Sized,
{
    file_loader: Arc<F>,
    inference_client: Arc<L>,
}

impl<F, L> GenerationService<F, L>
where
    F: FileLoader + ?Sized,
    L: InferenceClient + ?Sized,
{
    pub fn new(file_loader: Arc<F>, inference_client: Arc<L>) -> Self {
        Self {
            file_loader,
            inference_client,
        }
    }

    #[tracing::instrument(
        skip(self, request, document, data),
        fields(
            project_name = %request.project_name,
            output = %request.output,
            guide_type = %request.guide_type,
            filename = %document.filename,
        )
    )]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        document: &UploadedDocument,
        data: &[u8],
    ) -> Result<String, GenerationError> {
        let brochure_text = self.file_loader.extract_text(data, document).await?;

        if brochure_text.trim().is_empty() {
            tracing::warn!("Brochure yielded no text");
            return Err(ValidationError::EmptyBrochure.into());
        }

        tracing::debug!(chars = brochure_text.len(), "Brochure text extracted");

        let prompt = build_prompt(
            &request.project_name,
            request.output,
            request.guide_type,
            &brochure_text,
        );

        let content = self.inference_client.generate(&prompt).await?;

        tracing::info!(chars = content.len(), "Content generated");

        Ok(content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Extraction(#[from] FileLoaderError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}
