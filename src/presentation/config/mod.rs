mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    DEFAULT_INFERENCE_BASE_URL, DEFAULT_MODEL, InferenceSettings, LoggingSettings, ServerSettings,
    Settings,
};
