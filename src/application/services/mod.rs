mod generation_service;
mod prompt_builder;

pub use generation_service::{GenerationError, GenerationService};
pub use prompt_builder::build_prompt;
