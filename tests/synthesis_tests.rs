//! End-to-end synthesis tests over the public API

use infoprompt::domain::brief::{
    ContentDescription, Section, SidePanels, StyleConfig, BRAND_SIGNATURE,
};
use infoprompt::domain::synthesize;

fn sejarah_kopi() -> (ContentDescription, StyleConfig) {
    let description = ContentDescription {
        title: "Sejarah Kopi".to_string(),
        main_subject: "cangkir kopi vintage".to_string(),
        purpose: "history".to_string(),
        sections: vec![Section::new(
            "Asal Usul",
            "Ditemukan di Ethiopia; Menyebar ke Yaman",
            "peta_kuno",
        )],
        ..Default::default()
    };
    let style = StyleConfig {
        visual_style: "watercolor".to_string(),
        aspect_ratio: "9:16".parse().unwrap(),
    };
    (description, style)
}

#[test]
fn sejarah_kopi_prompt() {
    let (description, style) = sejarah_kopi();
    let output = synthesize(&description, &style);

    // Style fragment and title land in their slots
    assert!(output.prompt.contains("artistic watercolor painting style"));
    assert!(output.prompt.contains("Title: \"Sejarah Kopi\""));

    // Exactly one rendered section line
    let line = "- **Section 1 (Asal Usul):** [Content: Ditemukan di Ethiopia; Menyebar ke Yaman] [Icon/Visual: peta_kuno]";
    assert!(output.prompt.contains(line));
    assert_eq!(output.prompt.matches("**Section ").count(), 1);
}

#[test]
fn sejarah_kopi_caption() {
    let (description, style) = sejarah_kopi();
    let output = synthesize(&description, &style);

    // First bullet carries the section title, then only the first
    // semicolon-delimited clause, indented
    let bullet_pos = output.caption.find("✅ Asal Usul").unwrap();
    let lead_pos = output.caption.find("└ Ditemukan di Ethiopia").unwrap();
    assert!(bullet_pos < lead_pos);
    assert!(!output.caption.contains("Menyebar ke Yaman"));

    // History purpose picks the history voice
    assert!(output.caption.starts_with("🕰️ **JELAJAH WAKTU**"));
}

#[test]
fn empty_description_renders_nothing() {
    let output = synthesize(&ContentDescription::default(), &StyleConfig::default());
    assert_eq!(output.prompt, "");
    assert_eq!(output.caption, "");
}

#[test]
fn section_swap_swaps_rendered_lines() {
    let (mut description, style) = sejarah_kopi();
    description.sections = vec![
        Section::new("Alpha", "a", "x"),
        Section::new("Beta", "b", "y"),
    ];

    let before = synthesize(&description, &style);
    description.sections.swap(0, 1);
    let after = synthesize(&description, &style);

    assert!(before.prompt.contains("**Section 1 (Alpha):**"));
    assert!(before.prompt.contains("**Section 2 (Beta):**"));
    assert!(after.prompt.contains("**Section 1 (Beta):**"));
    assert!(after.prompt.contains("**Section 2 (Alpha):**"));
}

#[test]
fn mode_flags_gate_their_phrases() {
    let (mut description, style) = sejarah_kopi();

    let plain = synthesize(&description, &style);
    assert!(!plain.prompt.contains("CRITICAL IDENTITY & BRANDING OVERRIDE"));
    assert!(!plain.prompt.contains("NEGATIVE PROMPTS"));

    description.high_accuracy = true;
    description.enhanced_quality = true;
    let flagged = synthesize(&description, &style);
    assert!(flagged.prompt.contains("CRITICAL IDENTITY & BRANDING OVERRIDE"));
    assert!(flagged.prompt.contains("NEGATIVE PROMPTS"));
}

#[test]
fn brand_signature_survives_tampering() {
    let (mut description, style) = sejarah_kopi();
    description.brand_signature = "https://evil.example".to_string();
    description.sanitize();

    let output = synthesize(&description, &style);
    assert!(output.prompt.contains(BRAND_SIGNATURE));
    assert!(output.caption.contains(BRAND_SIGNATURE));
    assert!(!output.prompt.contains("evil.example"));
    assert!(!output.caption.contains("evil.example"));
}

#[test]
fn marketing_hook_is_exact() {
    let (mut description, style) = sejarah_kopi();
    description.purpose = "marketing".to_string();

    let output = synthesize(&description, &style);
    assert!(output.caption.starts_with("🚀 **TINGKATKAN BISNIS KAMU!**\n\n"));
}

#[test]
fn unknown_purpose_uses_raw_label() {
    let (mut description, style) = sejarah_kopi();
    description.purpose = "propaganda".to_string();

    let output = synthesize(&description, &style);
    assert!(output.prompt.contains("propaganda"));
    // Unknown purposes fall back to the default caption voice
    assert!(output.caption.starts_with("👋 **Halo Sobat Visual!**"));
}

#[test]
fn side_panels_render_in_fixed_order() {
    let (mut description, style) = sejarah_kopi();
    description.side_panels = SidePanels {
        qr_code: true,
        timeline: true,
        factbox: true,
        ..Default::default()
    };

    let output = synthesize(&description, &style);
    assert!(output.prompt.contains(
        "Include: Vertical Timeline, \"Did You Know?\" Factbox, QR Code Element."
    ));
}

#[test]
fn synthesis_is_byte_identical_across_calls() {
    let (description, style) = sejarah_kopi();
    let first = synthesize(&description, &style);
    let second = synthesize(&description, &style);
    assert_eq!(first.prompt, second.prompt);
    assert_eq!(first.caption, second.caption);
}
