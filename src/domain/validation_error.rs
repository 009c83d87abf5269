#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unsupported file type: {0:?}. Use PDF or TXT.")]
    UnsupportedFileType(String),
    #[error("output must be lpv, guide, or both")]
    InvalidOutputMode(String),
    #[error("guide_type must be area or building")]
    InvalidGuideType(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("No text extracted from file.")]
    EmptyBrochure,
}
