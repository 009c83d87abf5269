use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_MODEL: &str = "google/flan-t5-large";
pub const DEFAULT_INFERENCE_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct InferenceSettings {
    pub base_url: String,
    pub model: String,
    pub api_token: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for InferenceSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl InferenceSettings {
    pub fn has_credential(&self) -> bool {
        !self.api_token.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Loads settings for `environment` from defaults, the optional
    /// `appsettings.<env>.toml` file, `APP__*` variables, and finally the
    /// `HF_TOKEN` / `HF_MODEL` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::from_sources(
            environment,
            std::env::var("HF_TOKEN").ok(),
            std::env::var("HF_MODEL").ok(),
        )
    }

    pub fn from_sources(
        environment: Environment,
        hf_token: Option<String>,
        hf_model: Option<String>,
    ) -> Result<Self, ConfigError> {
        let hf_token = hf_token.map(|t| t.trim().to_string());
        let hf_model = hf_model
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("inference.base_url", DEFAULT_INFERENCE_BASE_URL)?
            .set_default("inference.model", DEFAULT_MODEL)?
            .set_default("inference.api_token", "")?
            .set_default("inference.timeout_secs", 120)?
            .set_default("logging.level", "info,prospectus=debug,tower_http=debug")?
            .set_default("logging.json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("inference.api_token", hf_token)?
            .set_override_option("inference.model", hf_model)?
            .build()?
            .try_deserialize()
    }
}
