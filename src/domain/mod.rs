mod document;
mod generation_request;
mod guide_type;
mod output_mode;
mod validation_error;

pub use document::{ContentType, UploadedDocument};
pub use generation_request::GenerationRequest;
pub use guide_type::GuideType;
pub use output_mode::OutputMode;
pub use validation_error::ValidationError;
