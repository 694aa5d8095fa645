//! Content planning port interface

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::brief::{AttachmentData, Section, SidePanels};

/// Planning errors
#[derive(Debug, Clone, Error)]
pub enum PlannerError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty plan response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Model returned a malformed content plan: {0}")]
    MalformedPlan(String),
}

/// What the model should build the content plan from
#[derive(Debug, Clone)]
pub enum PlanSource {
    /// Free-text topic or angle
    Topic(String),
    /// PDF document to extract data and narrative from
    Pdf(AttachmentData),
    /// Reference image whose topic and structure should be mimicked
    Image(AttachmentData),
}

/// A content plan as returned by the model. Every field is optional;
/// absent or blank fields keep their prior form values during merge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentPlan {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub main_subject: Option<String>,
    pub main_attribute: Option<String>,
    pub purpose: Option<String>,
    pub sections: Option<Vec<Section>>,
    pub sources: Option<String>,
    pub side_panels: Option<SidePanels>,
    pub requires_high_accuracy: Option<bool>,
}

impl ContentPlan {
    /// Parse a plan from raw model output. Tolerates a markdown code
    /// fence wrapped around the JSON body.
    pub fn from_response_text(text: &str) -> Result<Self, PlannerError> {
        let body = strip_code_fence(text);
        if body.is_empty() {
            return Err(PlannerError::EmptyResponse);
        }
        serde_json::from_str(body).map_err(|e| PlannerError::MalformedPlan(e.to_string()))
    }
}

/// Strip a surrounding ```lang ... ``` fence, if present
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string on the opening fence line
    match rest.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => rest.trim(),
    }
}

/// Port for AI content planning
#[async_trait]
pub trait ContentPlanner: Send + Sync {
    /// Produce a content plan for the given source.
    ///
    /// # Arguments
    /// * `source` - Topic text or an attached PDF/image
    ///
    /// # Returns
    /// The parsed content plan or an error
    async fn plan(&self, source: &PlanSource) -> Result<ContentPlan, PlannerError>;
}
