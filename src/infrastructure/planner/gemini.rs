//! Gemini API content planner adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ContentPlan, ContentPlanner, PlanSource, PlannerError};
use crate::domain::brief::AttachmentData;
use crate::domain::config::DEFAULT_MODEL;

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Response schema the model is asked to fill in
const PLAN_SCHEMA_INSTRUCTION: &str = r#"Return ONLY a valid JSON object matching exactly this structure:
{
  "title": "A catchy, short main headline (Indonesian)",
  "subtitle": "A compelling subtitle (Indonesian)",
  "main_subject": "Description of the central hero image visual",
  "main_attribute": "Specific visual attributes/props for the hero image",
  "purpose": "One of: education, marketing, social_media, report, awareness, history",
  "sections": [
    {
      "title": "Section Title (Indonesian)",
      "text": "Brief bullet points separated by semicolons (Indonesian)",
      "visual_hint": "A short visual description for a small icon/illustration for this section"
    }
  ],
  "sources": "One single reliable source name (e.g. 'NASA', 'Wikipedia'). If unknown, return 'Rojudin'",
  "side_panels": {
    "timeline": true/false,
    "map": true/false,
    "factbox": true/false,
    "statistics": true/false,
    "quote": true/false,
    "qr_code": true/false
  },
  "requires_high_accuracy": true/false (true if subject is a public figure, a famous brand product, or contains an official logo/emblem)
}
Create between 4 to 6 sections."#;

const PDF_CONTEXT: &str = "Analyze the attached PDF file deeply. Extract all key data, statistics, and the main narrative. Use this specific information to build the infographic structure.";

const IMAGE_CONTEXT: &str = "Analyze the attached image thoroughly. Extract the main visual topic, the art style, and the text information structure. Create a content plan that mimics this structure.";

// Request types for Gemini API

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

// Response types for Gemini API

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Gemini API content planner
pub struct GeminiPlanner {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiPlanner {
    /// Create a new Gemini planner with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a new Gemini planner with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::new(api_key)
        }
    }

    /// Override the API base URL (tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Build the instruction text for the given source
    fn build_instruction(source: &PlanSource) -> String {
        let context = match source {
            PlanSource::Topic(topic) => {
                format!("Focus specifically on this aspect/topic: \"{}\".", topic)
            }
            PlanSource::Pdf(_) => PDF_CONTEXT.to_string(),
            PlanSource::Image(_) => IMAGE_CONTEXT.to_string(),
        };
        format!(
            "Act as an expert infographic designer.\n{}\nCreate a comprehensive content plan.\n{}",
            context, PLAN_SCHEMA_INSTRUCTION
        )
    }

    /// Build the request body
    fn build_request(&self, source: &PlanSource) -> GenerateContentRequest {
        let mut parts = Vec::new();

        let attachment: Option<&AttachmentData> = match source {
            PlanSource::Topic(_) => None,
            PlanSource::Pdf(data) | PlanSource::Image(data) => Some(data),
        };
        if let Some(data) = attachment {
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: data.mime_type().as_str().to_string(),
                    data: data.to_base64(),
                }),
            });
        }

        parts.push(Part {
            text: Some(Self::build_instruction(source)),
            inline_data: None,
        });

        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        }
    }

    /// Extract text from response
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }
}

#[async_trait]
impl ContentPlanner for GeminiPlanner {
    async fn plan(&self, source: &PlanSource) -> Result<ContentPlan, PlannerError> {
        let url = self.api_url();
        let body = self.build_request(source);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PlannerError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PlannerError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlannerError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PlannerError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // Parse response
        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PlannerError::ParseError(e.to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(PlannerError::ApiError(error.message));
        }

        let text = Self::extract_text(&response).ok_or(PlannerError::EmptyResponse)?;

        ContentPlan::from_response_text(&text)
    }
}
