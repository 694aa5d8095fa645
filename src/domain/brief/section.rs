//! Content section value object

use serde::{Deserialize, Serialize};

/// One content block of the infographic. Sections carry no identity
/// beyond their position in the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub title: String,
    /// Body text, bullet points separated by semicolons
    pub text: String,
    /// Short visual description for the section icon/illustration
    pub visual_hint: String,
}

impl Section {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        visual_hint: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            visual_hint: visual_hint.into(),
        }
    }

    /// First semicolon-delimited clause of the body text, trimmed
    pub fn lead_point(&self) -> &str {
        self.text.split(';').next().unwrap_or("").trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_point_takes_first_clause() {
        let section = Section::new("Asal Usul", "Ditemukan di Ethiopia; Menyebar ke Yaman", "");
        assert_eq!(section.lead_point(), "Ditemukan di Ethiopia");
    }

    #[test]
    fn lead_point_without_semicolon() {
        let section = Section::new("T", "Satu poin saja", "");
        assert_eq!(section.lead_point(), "Satu poin saja");
    }

    #[test]
    fn lead_point_trims_whitespace() {
        let section = Section::new("T", "  padded ; rest", "");
        assert_eq!(section.lead_point(), "padded");
    }

    #[test]
    fn lead_point_empty_text() {
        let section = Section::default();
        assert_eq!(section.lead_point(), "");
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let section: Section = serde_json::from_str(r#"{"title": "Only Title"}"#).unwrap();
        assert_eq!(section.title, "Only Title");
        assert_eq!(section.text, "");
        assert_eq!(section.visual_hint, "");
    }
}
