use std::sync::Arc;

use prospectus::application::ports::{FileLoader, FileLoaderError};
use prospectus::domain::{ContentType, UploadedDocument};
use prospectus::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

use crate::helpers::build_pdf;

#[tokio::test]
async fn given_text_document_when_loading_then_delegates_to_text_adapter() {
    let loader = CompositeFileLoader::brochure_formats();
    let document = UploadedDocument::new("brochure.TXT", 16).unwrap();

    let result = loader.extract_text(b"Hello plain text", &document).await;

    assert_eq!(result.unwrap(), "Hello plain text");
}

#[tokio::test]
async fn given_pdf_document_when_loading_then_delegates_to_pdf_adapter() {
    let loader = CompositeFileLoader::brochure_formats();
    let pdf_bytes = build_pdf(&[Some("Payment plan 60/40")]);
    let document = UploadedDocument::new("brochure.pdf", pdf_bytes.len() as u64).unwrap();

    let text = loader.extract_text(&pdf_bytes, &document).await.unwrap();

    assert!(text.contains("Payment plan 60/40"));
}

#[tokio::test]
async fn given_no_adapter_for_content_type_when_loading_then_returns_unsupported() {
    let text_only: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(ContentType::Text, text_only)]);
    let document = UploadedDocument::new("brochure.pdf", 4).unwrap();

    let result = loader.extract_text(b"%PDF", &document).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFileType(_))));
}
