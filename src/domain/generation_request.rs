use super::guide_type::GuideType;
use super::output_mode::OutputMode;
use super::validation_error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub project_name: String,
    pub output: OutputMode,
    pub guide_type: GuideType,
}

impl GenerationRequest {
    /// Validates the raw form values. `guide_type` only has to be valid when a
    /// guide is requested; otherwise it falls back to the default.
    pub fn parse(
        project_name: impl Into<String>,
        output: &str,
        guide_type: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let output: OutputMode = output.parse()?;

        let guide_type = match guide_type {
            None => GuideType::default(),
            Some(raw) if output.includes_guide() => raw.parse::<GuideType>()?,
            Some(raw) => raw.parse::<GuideType>().unwrap_or_default(),
        };

        Ok(Self {
            project_name: project_name.into(),
            output,
            guide_type,
        })
    }
}
