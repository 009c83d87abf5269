mod file_loader;
mod inference_client;

pub use file_loader::{FileLoader, FileLoaderError};
pub use inference_client::{InferenceClient, InferenceError};
