mod error;
mod health;
mod process_project;

pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use process_project::process_project_handler;
