use std::fmt;
use std::str::FromStr;

use super::validation_error::ValidationError;

const AREA_GUIDE_HEADERS: &[&str] = &[
    "HIGHLIGHTS",
    "ABOUT <PROJECT NAME>",
    "IN A NUTSHELL",
    "PROPERTY",
    "PAYMENT PLAN",
    "LOCATION",
    "FAQs ABOUT <PROJECT NAME>",
];

const BUILDING_GUIDE_HEADERS: &[&str] = &[
    "HIGHLIGHTS",
    "ABOUT <BUILDING NAME>",
    "IN A NUTSHELL",
    "BUILDING DETAILS",
    "TYPES OF UNITS",
    "AMENITIES",
    "TRANSPORTATION NEAR <BUILDING NAME>",
    "NEARBY AMENITIES",
    "THINGS TO CONSIDER",
    "FAQs ABOUT <BUILDING NAME>",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuideType {
    #[default]
    Area,
    Building,
}

impl GuideType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideType::Area => "area",
            GuideType::Building => "building",
        }
    }

    /// Section headers the model must use, in order. The angle-bracket
    /// placeholders are part of the literal header text.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            GuideType::Area => AREA_GUIDE_HEADERS,
            GuideType::Building => BUILDING_GUIDE_HEADERS,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GuideType::Area => "AREA GUIDE",
            GuideType::Building => "BUILDING GUIDE",
        }
    }
}

impl FromStr for GuideType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "area" => Ok(Self::Area),
            "building" => Ok(Self::Building),
            _ => Err(ValidationError::InvalidGuideType(s.to_string())),
        }
    }
}

impl fmt::Display for GuideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
