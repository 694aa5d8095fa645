//! Prompt/caption synthesizer
//!
//! A pure, deterministic transformation from a content description and
//! style configuration into two text outputs. No side effects, no failure
//! path: unknown catalog keys fall back to their raw value and missing
//! fields render as empty segments.

mod boosters;
mod caption;
mod prompt;
mod template;

pub use boosters::{negative_prompts, quality_boosters, BASE_QUALITY_BOOSTERS, NEGATIVE_PROMPTS};
pub use template::{substitute, PLACEHOLDERS, PROMPT_TEMPLATE};

use crate::domain::brief::{ContentDescription, StyleConfig};

/// The two rendered text artifacts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisOutput {
    /// Text-to-image generation prompt
    pub prompt: String,
    /// Social-media caption
    pub caption: String,
}

impl SynthesisOutput {
    pub fn is_empty(&self) -> bool {
        self.prompt.is_empty() && self.caption.is_empty()
    }
}

/// Render both outputs from scratch. Returns empty strings when the
/// description has no meaningful content (blank title, blank main
/// subject, no sections).
pub fn synthesize(description: &ContentDescription, style: &StyleConfig) -> SynthesisOutput {
    if !description.has_content() {
        return SynthesisOutput::default();
    }

    SynthesisOutput {
        prompt: prompt::build_prompt(description, style),
        caption: caption::build_caption(description, style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::brief::{Section, SidePanels};

    fn sample_description() -> ContentDescription {
        ContentDescription {
            purpose: "history".to_string(),
            title: "Sejarah Kopi".to_string(),
            main_subject: "cangkir kopi vintage".to_string(),
            sections: vec![Section::new(
                "Asal Usul",
                "Ditemukan di Ethiopia; Menyebar ke Yaman",
                "peta_kuno",
            )],
            ..Default::default()
        }
    }

    fn sample_style() -> StyleConfig {
        StyleConfig {
            visual_style: "watercolor".to_string(),
            aspect_ratio: "9:16".parse().unwrap(),
        }
    }

    #[test]
    fn empty_description_yields_empty_outputs() {
        let output = synthesize(&ContentDescription::default(), &StyleConfig::default());
        assert!(output.is_empty());
        assert_eq!(output.prompt, "");
        assert_eq!(output.caption, "");
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let desc = ContentDescription {
            title: "   ".to_string(),
            main_subject: "\t".to_string(),
            ..Default::default()
        };
        assert!(synthesize(&desc, &StyleConfig::default()).is_empty());
    }

    #[test]
    fn prompt_contains_resolved_values() {
        let output = synthesize(&sample_description(), &sample_style());
        assert!(output.prompt.contains("artistic watercolor painting style"));
        assert!(output.prompt.contains("Title: \"Sejarah Kopi\""));
        assert!(output.prompt.contains("Aspect Ratio: 9:16."));
        assert!(output.prompt.contains("Arsip Sejarah / Biografi"));
        assert!(output.prompt.contains(
            "- **Section 1 (Asal Usul):** [Content: Ditemukan di Ethiopia; Menyebar ke Yaman] [Icon/Visual: peta_kuno]"
        ));
    }

    #[test]
    fn prompt_has_no_leftover_placeholders() {
        let output = synthesize(&sample_description(), &sample_style());
        for placeholder in PLACEHOLDERS {
            assert!(
                !output.prompt.contains(placeholder),
                "placeholder {} leaked into output",
                placeholder
            );
        }
    }

    #[test]
    fn side_panels_render_none_when_disabled() {
        let output = synthesize(&sample_description(), &sample_style());
        assert!(output.prompt.contains("Include: None."));
    }

    #[test]
    fn side_panels_render_labels_in_order() {
        let mut desc = sample_description();
        desc.side_panels = SidePanels {
            map: true,
            quote: true,
            ..Default::default()
        };
        let output = synthesize(&desc, &sample_style());
        assert!(output
            .prompt
            .contains("Include: Geographic Map Location, Highlight Quote Block."));
    }

    #[test]
    fn section_order_is_preserved() {
        let mut desc = sample_description();
        desc.sections = vec![
            Section::new("Pertama", "a", "x"),
            Section::new("Kedua", "b", "y"),
        ];
        let output = synthesize(&desc, &sample_style());
        let first = output.prompt.find("**Section 1 (Pertama):**").unwrap();
        let second = output.prompt.find("**Section 2 (Kedua):**").unwrap();
        assert!(first < second);

        desc.sections.swap(0, 1);
        let swapped = synthesize(&desc, &sample_style());
        assert!(swapped.prompt.contains("**Section 1 (Kedua):**"));
        assert!(swapped.prompt.contains("**Section 2 (Pertama):**"));
    }

    #[test]
    fn high_accuracy_adds_override_block() {
        let mut desc = sample_description();
        let without = synthesize(&desc, &sample_style());
        assert!(!without.prompt.contains("CRITICAL IDENTITY & BRANDING OVERRIDE"));

        desc.high_accuracy = true;
        let with = synthesize(&desc, &sample_style());
        assert!(with.prompt.contains("CRITICAL IDENTITY & BRANDING OVERRIDE"));
        assert!(with
            .prompt
            .contains("perfect facial likeness for \"cangkir kopi vintage\""));
    }

    #[test]
    fn enhanced_quality_adds_negative_prompts() {
        let mut desc = sample_description();
        let without = synthesize(&desc, &sample_style());
        assert!(!without.prompt.contains("NEGATIVE PROMPTS"));

        desc.enhanced_quality = true;
        let with = synthesize(&desc, &sample_style());
        assert!(with
            .prompt
            .contains("**8. NEGATIVE PROMPTS (AVOID THESE):**"));
        assert!(with.prompt.contains("malformed logos"));
    }

    #[test]
    fn caption_first_bullet_uses_lead_point() {
        let output = synthesize(&sample_description(), &sample_style());
        assert!(output.caption.contains("✅ Asal Usul\n"));
        assert!(output.caption.contains("   └ Ditemukan di Ethiopia\n"));
        assert!(!output.caption.contains("Menyebar ke Yaman"));
    }

    #[test]
    fn caption_hook_for_marketing() {
        let mut desc = sample_description();
        desc.purpose = "marketing".to_string();
        let output = synthesize(&desc, &sample_style());
        assert!(output
            .caption
            .starts_with("🚀 **TINGKATKAN BISNIS KAMU!**\n\n"));
    }

    #[test]
    fn synthesis_is_idempotent() {
        let desc = sample_description();
        let style = sample_style();
        let first = synthesize(&desc, &style);
        let second = synthesize(&desc, &style);
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_style_uses_raw_id_as_fragment() {
        let mut style = sample_style();
        style.visual_style = "ukiyo_e".to_string();
        let output = synthesize(&sample_description(), &style);
        assert!(output.prompt.contains("in a ukiyo_e style"));
    }
}
