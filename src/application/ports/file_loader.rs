use async_trait::async_trait;

use crate::domain::UploadedDocument;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("failed to parse document: {0}")]
    DocumentParse(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
