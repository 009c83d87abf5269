mod hugging_face_client;
mod mock_inference_client;

pub use hugging_face_client::HuggingFaceClient;
pub use mock_inference_client::MockInferenceClient;
