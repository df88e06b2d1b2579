//! ServiceType enum naming every wizard-driven service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The services that are configured through a step wizard.
///
/// Each variant owns exactly one catalog and one preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Website,
    Image,
    Sound,
    Video,
    Animation,
    Branding,
}

impl ServiceType {
    /// Returns all service types in canonical order.
    pub fn all() -> &'static [ServiceType] {
        &[
            ServiceType::Website,
            ServiceType::Image,
            ServiceType::Sound,
            ServiceType::Video,
            ServiceType::Animation,
            ServiceType::Branding,
        ]
    }

    /// Returns the stable tag used in catalog documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Website => "website",
            ServiceType::Image => "image",
            ServiceType::Sound => "sound",
            ServiceType::Video => "video",
            ServiceType::Animation => "animation",
            ServiceType::Branding => "branding",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::Website => "Website",
            ServiceType::Image => "Image Package",
            ServiceType::Sound => "Sound Package",
            ServiceType::Video => "Video Production",
            ServiceType::Animation => "Animation",
            ServiceType::Branding => "Branding",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("service_type", format!("unknown service '{}'", s))
            })
    }
}
