//! Quality booster and negative-prompt assembly

/// Base phrase every prompt starts its booster string with
pub const BASE_QUALITY_BOOSTERS: &str =
    "masterpiece, best quality, professional composition, 8k resolution, highly detailed";

/// Negative prompts emitted only in enhanced-quality mode
pub const NEGATIVE_PROMPTS: &str = "low quality, jpeg artifacts, blurry, noisy, text errors, typos, watermark, signature, amateur, deformed, ugly, disfigured, poor composition, out of frame, extra limbs, bad anatomy, bad typography, crooked text, malformed logos";

const HIGH_ACCURACY_CLAUSE: &str = ", perfect facial likeness, accurate identity, photorealistic face, official logo accuracy, correct brand colors, authentic insignia, editorial photography";

const ENHANCED_QUALITY_CLAUSE: &str = ", award-winning graphic design, cinematic lighting, hyper-detailed, intricate details, sharp focus, professional color grading, editorial quality, behance HD, artstation HQ, physically based rendering";

const DEFAULT_STYLE_CLAUSE: &str =
    ", vector aesthetics, clean design, award winning graphic design, sharp focus";

struct BoosterRule {
    styles: &'static [&'static str],
    clause: &'static str,
}

/// Style-specific booster clauses, evaluated in order; first match wins.
/// The order matters: some ids could match more than one group.
const BOOSTER_RULES: &[BoosterRule] = &[
    BoosterRule {
        styles: &["vintage", "vintage_blueprint"],
        clause: ", archival paper texture, intricate cross-hatching, copperplate engraving, museum quality, sepia tones, botanical illustration style",
    },
    BoosterRule {
        styles: &["modern_flat", "abstract_geometric"],
        clause: ", vector art, clean lines, minimalist, flat design, behance trending, dribbble aesthetic, sharp edges, vivid colors, no noise",
    },
    BoosterRule {
        styles: &["3d_realistic"],
        clause: ", unreal engine 5 render, octane render, raytracing, global illumination, photorealistic, 8k textures, cinematic lighting, depth of field, hyper-detailed",
    },
    BoosterRule {
        styles: &["3d_render", "3d_loaded"],
        clause: ", blender 3d, claymorphism, soft studio lighting, subsurface scattering, ambient occlusion, cute 3d character, matte finish, pastel colors",
    },
    BoosterRule {
        styles: &["futuristic", "glowing_neon"],
        clause: ", cyberpunk aesthetic, neon glow, chromatic aberration, synthwave, futuristic interface, HUD details, dark background, bioluminescence, volumetric lighting",
    },
    BoosterRule {
        styles: &["watercolor"],
        clause: ", watercolor paper texture, wet-on-wet technique, alcohol ink, soft edges, artistic wash, traditional art, fluid strokes, pastel tones",
    },
    BoosterRule {
        styles: &["blueprint"],
        clause: ", technical drawing, schematic, white lines on blue background, precise grid, engineering diagram, CAD style, architectural plan",
    },
    BoosterRule {
        styles: &["isometric"],
        clause: ", isometric projection, 3d vector, orthographic view, clean geometry, sim city style, low poly aesthetic, precise angles",
    },
    BoosterRule {
        styles: &["paper_cutout"],
        clause: ", layered paper art, depth of field, shadowbox effect, craft texture, scissors cut edges, tactile feel, paper grain",
    },
    BoosterRule {
        styles: &["pop_art"],
        clause: ", halftone pattern, ben-day dots, comic book style, bold black outlines, vibrant primary colors, pop culture aesthetic, roy lichtenstein style",
    },
    BoosterRule {
        styles: &["wooden_carved"],
        clause: ", natural wood grain texture, bas-relief, hand carved, varnish finish, rustic aesthetic, carpentry details, tactile wood surface",
    },
    BoosterRule {
        styles: &["chalkboard"],
        clause: ", chalk texture, slate background, dusty residue, hand lettering, educational diagram, white chalk on green board",
    },
    BoosterRule {
        styles: &["pixel_art"],
        clause: ", 16-bit, pixel perfect, sprite sheet, retro gaming, dithering, arcade aesthetic, digital grid",
    },
    BoosterRule {
        styles: &["claymation"],
        clause: ", plasticine texture, stop motion, handmade, fingerprint details, clay shader, aardman style, physical model look",
    },
    BoosterRule {
        styles: &["knitted_art"],
        clause: ", wool texture, yarn strands, crochet pattern, fuzzy, fabric simulation, macro photography of fabric, warm and cozy",
    },
    BoosterRule {
        styles: &["minimalist_line_art"],
        clause: ", continuous line drawing, black ink on white paper, minimalism, abstraction, elegant curves, negative space",
    },
];

/// Accumulate the quality-booster string for a style and mode flags
pub fn quality_boosters(style_id: &str, high_accuracy: bool, enhanced_quality: bool) -> String {
    let mut out = String::from(BASE_QUALITY_BOOSTERS);

    let clause = BOOSTER_RULES
        .iter()
        .find(|rule| rule.styles.contains(&style_id))
        .map(|rule| rule.clause)
        .unwrap_or(DEFAULT_STYLE_CLAUSE);
    out.push_str(clause);

    if high_accuracy {
        out.push_str(HIGH_ACCURACY_CLAUSE);
    }
    if enhanced_quality {
        out.push_str(ENHANCED_QUALITY_CLAUSE);
    }
    out
}

/// Negative prompts are only produced in enhanced-quality mode
pub fn negative_prompts(enhanced_quality: bool) -> &'static str {
    if enhanced_quality {
        NEGATIVE_PROMPTS
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::VISUAL_STYLES;

    #[test]
    fn base_always_present() {
        let boosters = quality_boosters("vintage", false, false);
        assert!(boosters.starts_with(BASE_QUALITY_BOOSTERS));
    }

    #[test]
    fn style_clause_selected() {
        let boosters = quality_boosters("watercolor", false, false);
        assert!(boosters.contains("wet-on-wet technique"));

        let boosters = quality_boosters("3d_realistic", false, false);
        assert!(boosters.contains("unreal engine 5 render"));
    }

    #[test]
    fn grouped_styles_share_a_clause() {
        let vintage = quality_boosters("vintage", false, false);
        let vintage_blueprint = quality_boosters("vintage_blueprint", false, false);
        assert_eq!(vintage, vintage_blueprint);
    }

    #[test]
    fn unknown_style_gets_default_clause() {
        let boosters = quality_boosters("oil_painting", false, false);
        assert!(boosters.contains("vector aesthetics, clean design"));
    }

    #[test]
    fn every_catalog_style_has_a_specific_clause() {
        // chalkboard through knitted_art all have dedicated groups;
        // only unknown ids should fall through to the default clause
        for style in VISUAL_STYLES {
            let boosters = quality_boosters(style.id, false, false);
            assert!(
                !boosters.contains("vector aesthetics, clean design"),
                "style {} unexpectedly hit the default clause",
                style.id
            );
        }
    }

    #[test]
    fn high_accuracy_appends_identity_clause() {
        let boosters = quality_boosters("vintage", true, false);
        assert!(boosters.contains("perfect facial likeness"));

        let without = quality_boosters("vintage", false, false);
        assert!(!without.contains("perfect facial likeness"));
    }

    #[test]
    fn enhanced_quality_appends_editorial_clause() {
        let boosters = quality_boosters("vintage", false, true);
        assert!(boosters.contains("physically based rendering"));
    }

    #[test]
    fn clause_order_is_accuracy_then_enhanced() {
        let boosters = quality_boosters("vintage", true, true);
        let accuracy_pos = boosters.find("perfect facial likeness").unwrap();
        let enhanced_pos = boosters.find("physically based rendering").unwrap();
        assert!(accuracy_pos < enhanced_pos);
    }

    #[test]
    fn negatives_only_in_enhanced_mode() {
        assert_eq!(negative_prompts(false), "");
        assert!(negative_prompts(true).contains("jpeg artifacts"));
    }
}
