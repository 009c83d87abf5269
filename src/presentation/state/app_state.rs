use std::sync::Arc;

use crate::application::ports::{FileLoader, InferenceClient};
use crate::application::services::GenerationService;

pub struct AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: InferenceClient + ?Sized,
{
    pub generation_service: Arc<GenerationService<F, L>>,
}

impl<F, L> AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: InferenceClient + ?Sized,
{
    pub fn new(file_loader: Arc<F>, inference_client: Arc<L>) -> Self {
        Self {
            generation_service: Arc::new(GenerationService::new(file_loader, inference_client)),
        }
    }
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: InferenceClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            generation_service: Arc::clone(&self.generation_service),
        }
    }
}
