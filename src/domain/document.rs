use super::validation_error::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
}

impl ContentType {
    /// Resolves the content type from the filename suffix alone, ignoring case.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let name = filename.to_lowercase();
        if name.ends_with(".txt") {
            Some(Self::Text)
        } else if name.ends_with(".pdf") {
            Some(Self::Pdf)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "txt",
        }
    }
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, size_bytes: u64) -> Result<Self, ValidationError> {
        let filename = filename.into();
        let content_type = ContentType::from_filename(&filename)
            .ok_or_else(|| ValidationError::UnsupportedFileType(filename.clone()))?;

        Ok(Self {
            filename,
            content_type,
            size_bytes,
        })
    }
}
