//! Style configuration value objects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::InvalidAspectRatioError;

/// Default visual style id
pub const DEFAULT_VISUAL_STYLE: &str = "3d_realistic";

/// All supported aspect ratios
pub const ALL_ASPECT_RATIOS: &[AspectRatio] = &[
    AspectRatio::Ratio9x16,
    AspectRatio::Ratio3x4,
    AspectRatio::Ratio1x1,
    AspectRatio::Ratio4x3,
    AspectRatio::Ratio16x9,
];

/// Output aspect ratio of the generated infographic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    #[default]
    Ratio9x16,
    Ratio3x4,
    Ratio1x1,
    Ratio4x3,
    Ratio16x9,
}

impl AspectRatio {
    /// Get the ratio string as rendered into the prompt
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ratio9x16 => "9:16",
            Self::Ratio3x4 => "3:4",
            Self::Ratio1x1 => "1:1",
            Self::Ratio4x3 => "4:3",
            Self::Ratio16x9 => "16:9",
        }
    }
}

impl FromStr for AspectRatio {
    type Err = InvalidAspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "9:16" => Ok(Self::Ratio9x16),
            "3:4" => Ok(Self::Ratio3x4),
            "1:1" => Ok(Self::Ratio1x1),
            "4:3" => Ok(Self::Ratio4x3),
            "16:9" => Ok(Self::Ratio16x9),
            _ => Err(InvalidAspectRatioError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AspectRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Selected visual style and output ratio.
/// The style id may be any string; unknown ids fall back to themselves
/// when the catalog is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub visual_style: String,
    pub aspect_ratio: AspectRatio,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            visual_style: DEFAULT_VISUAL_STYLE.to_string(),
            aspect_ratio: AspectRatio::default(),
        }
    }
}
