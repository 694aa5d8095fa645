//! Image-prompt assembly

use crate::domain::brief::{ContentDescription, StyleConfig, BRAND_SIGNATURE};
use crate::domain::catalog::{purpose_label, style_fragment};

use super::boosters::{negative_prompts, quality_boosters};
use super::template::{substitute, PROMPT_TEMPLATE};

pub(super) fn build_prompt(desc: &ContentDescription, style: &StyleConfig) -> String {
    let fragment = style_fragment(&style.visual_style);
    let purpose = purpose_label(&desc.purpose);
    let boosters = quality_boosters(
        &style.visual_style,
        desc.high_accuracy,
        desc.enhanced_quality,
    );
    let negatives = negative_prompts(desc.enhanced_quality);

    let section_list = desc
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            format!(
                "- **Section {} ({}):** [Content: {}] [Icon/Visual: {}]",
                i + 1,
                section.title,
                section.text,
                section.visual_hint
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let labels = desc.side_panels.enabled_labels();
    let side_panels = if labels.is_empty() {
        "None".to_string()
    } else {
        labels.join(", ")
    };

    let mut prompt = substitute(
        PROMPT_TEMPLATE,
        &[
            ("{PURPOSE}", purpose),
            ("{VISUAL_STYLE}", fragment),
            ("{ASPECT_RATIO}", style.aspect_ratio.as_str()),
            ("{TITLE}", &desc.title),
            ("{SUBTITLE}", &desc.subtitle),
            ("{SOURCES}", &desc.sources),
            ("{MAIN_SUBJECT}", &desc.main_subject),
            ("{MAIN_ATTIRE_OR_ATTRIBUTE}", &desc.main_attribute),
            ("{BRAND_URL}", BRAND_SIGNATURE),
            ("{SECTION_LIST}", &section_list),
            ("{SIDE_PANELS}", &side_panels),
            ("{QUALITY_BOOSTERS}", &boosters),
        ],
    );

    if desc.high_accuracy {
        prompt.push_str(&identity_override_block(&desc.main_subject));
    }

    if !negatives.is_empty() {
        prompt.push_str("\n\n**8. NEGATIVE PROMPTS (AVOID THESE):**\n");
        prompt.push_str(negatives);
    }

    prompt
}

fn identity_override_block(main_subject: &str) -> String {
    format!(
        "\n\n**CRITICAL IDENTITY & BRANDING OVERRIDE:** \n1. **Public Figures:** Ensure perfect facial likeness for \"{}\". \n2. **Logos/Emblems:** If a band logo, government seal, or brand logo is present, render it with **100% accuracy** to the official design. Do not hallucinate text or alter shapes. Use official brand colors. \n3. **Products:** Maintain exact product packaging details.",
        main_subject
    )
}
