//! Infographic content description

use serde::{Deserialize, Serialize};

use super::section::Section;

/// Fixed footer signature rendered into every prompt and caption.
/// Never taken from user input, loaded records, or AI output.
pub const BRAND_SIGNATURE: &str = "https://lynk.id/r_besar.id";

/// Optional auxiliary panels of the infographic layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidePanels {
    pub timeline: bool,
    pub map: bool,
    pub factbox: bool,
    pub statistics: bool,
    pub quote: bool,
    pub qr_code: bool,
}

impl SidePanels {
    /// Human labels for every enabled panel, in fixed flag order
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.timeline {
            labels.push("Vertical Timeline");
        }
        if self.map {
            labels.push("Geographic Map Location");
        }
        if self.factbox {
            labels.push("\"Did You Know?\" Factbox");
        }
        if self.statistics {
            labels.push("Statistical Chart/Graph");
        }
        if self.quote {
            labels.push("Highlight Quote Block");
        }
        if self.qr_code {
            labels.push("QR Code Element");
        }
        labels
    }
}

/// The structured user input describing an infographic.
/// All fields default to empty/false, never to an absent state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDescription {
    /// Purpose id (education, marketing, social_media, report, awareness,
    /// history) or any custom string
    pub purpose: String,
    pub title: String,
    pub subtitle: String,
    pub main_subject: String,
    pub main_attribute: String,
    pub sections: Vec<Section>,
    pub side_panels: SidePanels,
    pub sources: String,
    /// Demand identity/logo fidelity instructions in the prompt
    pub high_accuracy: bool,
    /// Append stronger quality boosters and a negative-prompt block
    pub enhanced_quality: bool,
    /// Always forced back to [`BRAND_SIGNATURE`] by [`Self::sanitize`]
    #[serde(skip_serializing)]
    pub brand_signature: String,
}

impl Default for ContentDescription {
    fn default() -> Self {
        Self {
            purpose: String::new(),
            title: String::new(),
            subtitle: String::new(),
            main_subject: String::new(),
            main_attribute: String::new(),
            sections: Vec::new(),
            side_panels: SidePanels::default(),
            sources: String::new(),
            high_accuracy: false,
            enhanced_quality: false,
            brand_signature: BRAND_SIGNATURE.to_string(),
        }
    }
}

impl ContentDescription {
    /// Whether there is anything meaningful to render.
    /// Blank title, blank main subject, and no sections means no output.
    pub fn has_content(&self) -> bool {
        !self.title.trim().is_empty()
            || !self.main_subject.trim().is_empty()
            || !self.sections.is_empty()
    }

    /// Re-force the fixed brand signature. Must run after every load path
    /// (project file, history entry, share token, auto-fill result) so a
    /// tampered record can never change the rendered signature.
    pub fn sanitize(&mut self) {
        self.brand_signature = BRAND_SIGNATURE.to_string();
    }

    /// Consuming variant of [`Self::sanitize`]
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }
}
