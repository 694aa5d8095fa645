//! Prompt template and placeholder substitution

/// Every placeholder the synthesizer supplies, each appearing exactly once
/// in [`PROMPT_TEMPLATE`]. A test guards against template/code drift.
pub const PLACEHOLDERS: &[&str] = &[
    "{PURPOSE}",
    "{VISUAL_STYLE}",
    "{ASPECT_RATIO}",
    "{TITLE}",
    "{SUBTITLE}",
    "{SOURCES}",
    "{MAIN_SUBJECT}",
    "{MAIN_ATTIRE_OR_ATTRIBUTE}",
    "{BRAND_URL}",
    "{SECTION_LIST}",
    "{SIDE_PANELS}",
    "{QUALITY_BOOSTERS}",
];

/// The fixed prompt structure. Placeholders are replaced by a single
/// find-replace pass; everything else is emitted verbatim.
pub const PROMPT_TEMPLATE: &str = "Generate a **professional, award-winning infographic** designed for {PURPOSE} in a {VISUAL_STYLE} style. \n\n**1. LAYOUT & COMPOSITION:**\n- Aspect Ratio: {ASPECT_RATIO}.\n- Composition: Use a clear visual hierarchy with a dominant central hero image and organized surrounding sections.\n\n**2. HEADER & TYPOGRAPHY:**\n- Title: \"{TITLE}\" (Render text with absolute precision, vector-sharp lines, no typos).\n- Subtitle: \"{SUBTITLE}\" (Clean, legible font).\n\n**3. CENTRAL HERO (CRITICAL DETAIL):**\n- Subject: {MAIN_SUBJECT}.\n- Attributes: {MAIN_ATTIRE_OR_ATTRIBUTE}.\n- **IDENTITY & BRAND PRESERVATION (CRITICAL):** \n  - **People:** If a public figure is mentioned, you **MUST generate a recognizable likeness**. Prioritize facial accuracy.\n  - **Logos/Brands:** If a specific Band Logo, Government Emblem, or Product Brand is mentioned, render it with **high fidelity to the official design**. Use official brand colors (hex-accurate), correct geometry, and correct spelling.\n\n**4. CONTENT SECTIONS:**\nCreate structured visual blocks for the following content:\n{SECTION_LIST}\n\n**5. SIDE PANELS:**\nInclude: {SIDE_PANELS}.\n\n**6. BRANDING & FOOTER:**\n- Sources: \"{SOURCES}\" (Legible small text).\n- Footer Signature: \"{BRAND_URL}\" (Render as **PLAIN TEXT ONLY**. DO NOT generate any logo, icon, or emblem for this URL. Just the text).\n\n**7. QUALITY & AESTHETICS:**\n- 8k resolution, highly detailed, professional graphic design, cinematic lighting, sharp focus, masterpiece quality. \n- {QUALITY_BOOSTERS}";

/// Replace each placeholder exactly once. Substitution is a direct
/// find-replace, so call order does not matter for a well-formed template.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (placeholder, value) in values {
        out = out.replacen(placeholder, value, 1);
    }
    out
}
