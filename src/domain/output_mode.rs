use std::fmt;
use std::str::FromStr;

use super::validation_error::ValidationError;

/// Which content the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Lpv,
    Guide,
    Both,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Lpv => "lpv",
            OutputMode::Guide => "guide",
            OutputMode::Both => "both",
        }
    }

    pub fn includes_description(&self) -> bool {
        matches!(self, OutputMode::Lpv | OutputMode::Both)
    }

    pub fn includes_guide(&self) -> bool {
        matches!(self, OutputMode::Guide | OutputMode::Both)
    }
}

impl FromStr for OutputMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lpv" => Ok(Self::Lpv),
            "guide" => Ok(Self::Guide),
            "both" => Ok(Self::Both),
            _ => Err(ValidationError::InvalidOutputMode(s.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
