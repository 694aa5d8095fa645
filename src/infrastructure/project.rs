//! Project file loader
//!
//! The on-disk form state. TOML is the primary format; JSON is accepted
//! for interchange. Scalar fields come before the side_panels table and
//! the sections array so the TOML serializer emits a valid document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use crate::domain::brief::{ContentDescription, Section, SidePanels, StyleConfig};
use crate::domain::error::InvalidAspectRatioError;

/// Project file errors
#[derive(Debug, Clone, Error)]
pub enum ProjectError {
    #[error("Failed to read project file: {0}")]
    ReadError(String),

    #[error("Failed to write project file: {0}")]
    WriteError(String),

    #[error("Failed to parse project file: {0}")]
    ParseError(String),

    #[error("Unsupported project format '{0}'. Use .toml or .json")]
    UnsupportedFormat(String),

    #[error(transparent)]
    InvalidAspectRatio(#[from] InvalidAspectRatioError),
}

/// Serialized form state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    pub purpose: String,
    pub title: String,
    pub subtitle: String,
    pub main_subject: String,
    pub main_attribute: String,
    pub sources: String,
    pub high_accuracy: bool,
    pub enhanced_quality: bool,
    pub side_panels: SidePanels,
    pub sections: Vec<Section>,
}

impl ProjectFile {
    /// Snapshot a description and style into a writable project
    pub fn from_parts(description: &ContentDescription, style: &StyleConfig) -> Self {
        Self {
            visual_style: Some(style.visual_style.clone()),
            aspect_ratio: Some(style.aspect_ratio.to_string()),
            purpose: description.purpose.clone(),
            title: description.title.clone(),
            subtitle: description.subtitle.clone(),
            main_subject: description.main_subject.clone(),
            main_attribute: description.main_attribute.clone(),
            sources: description.sources.clone(),
            high_accuracy: description.high_accuracy,
            enhanced_quality: description.enhanced_quality,
            side_panels: description.side_panels,
            sections: description.sections.clone(),
        }
    }

    /// Build the sanitized content description
    pub fn description(&self) -> ContentDescription {
        ContentDescription {
            purpose: self.purpose.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            main_subject: self.main_subject.clone(),
            main_attribute: self.main_attribute.clone(),
            sections: self.sections.clone(),
            side_panels: self.side_panels,
            sources: self.sources.clone(),
            high_accuracy: self.high_accuracy,
            enhanced_quality: self.enhanced_quality,
            ..Default::default()
        }
        .sanitized()
    }

    /// Resolve the style, falling back to the given defaults for
    /// fields the project leaves unset
    pub fn style_or(&self, fallback: StyleConfig) -> Result<StyleConfig, ProjectError> {
        let visual_style = self
            .visual_style
            .clone()
            .unwrap_or(fallback.visual_style);
        let aspect_ratio = match &self.aspect_ratio {
            Some(raw) => raw.parse()?,
            None => fallback.aspect_ratio,
        };
        Ok(StyleConfig {
            visual_style,
            aspect_ratio,
        })
    }

    /// Serialize for display or stdout
    pub fn to_toml_string(&self) -> Result<String, ProjectError> {
        toml::to_string_pretty(self).map_err(|e| ProjectError::WriteError(e.to_string()))
    }
}

/// Load a project file, dispatching on its extension
pub async fn load(path: &Path) -> Result<ProjectFile, ProjectError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| ProjectError::ReadError(format!("{}: {}", path.display(), e)))?;

    match extension(path)?.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| ProjectError::ParseError(e.to_string())),
        "json" => {
            serde_json::from_str(&content).map_err(|e| ProjectError::ParseError(e.to_string()))
        }
        other => Err(ProjectError::UnsupportedFormat(other.to_string())),
    }
}

/// Save a project file, dispatching on its extension
pub async fn save(path: &Path, project: &ProjectFile) -> Result<(), ProjectError> {
    let content = match extension(path)?.as_str() {
        "toml" => project.to_toml_string()?,
        "json" => serde_json::to_string_pretty(project)
            .map_err(|e| ProjectError::WriteError(e.to_string()))?,
        other => return Err(ProjectError::UnsupportedFormat(other.to_string())),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ProjectError::WriteError(e.to_string()))?;
        }
    }

    fs::write(path, content)
        .await
        .map_err(|e| ProjectError::WriteError(format!("{}: {}", path.display(), e)))
}

fn extension(path: &Path) -> Result<String, ProjectError> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| ProjectError::UnsupportedFormat(path.display().to_string()))
}
