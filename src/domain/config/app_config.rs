//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::brief::{AspectRatio, DEFAULT_VISUAL_STYLE};

/// Default Gemini model for content planning
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub visual_style: Option<String>,
    pub aspect_ratio: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            visual_style: Some(DEFAULT_VISUAL_STYLE.to_string()),
            aspect_ratio: Some(AspectRatio::default().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            visual_style: other.visual_style.or(self.visual_style),
            aspect_ratio: other.aspect_ratio.or(self.aspect_ratio),
        }
    }

    /// Get model name, or the default model if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get visual style id, or the default style if not set
    pub fn visual_style_or_default(&self) -> &str {
        self.visual_style.as_deref().unwrap_or(DEFAULT_VISUAL_STYLE)
    }

    /// Get aspect ratio as parsed value, or default if not set/invalid
    pub fn aspect_ratio_or_default(&self) -> AspectRatio {
        self.aspect_ratio
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}
