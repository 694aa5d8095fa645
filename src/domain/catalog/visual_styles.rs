//! Visual style catalog
//!
//! Static table mapping style ids to display labels and the descriptive
//! fragment inserted into the rendered prompt. Loaded once, never mutated.

/// One visual style entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt_fragment: &'static str,
}

/// All known visual styles, keyed uniquely by id
pub const VISUAL_STYLES: &[StyleEntry] = &[
    StyleEntry {
        id: "vintage",
        label: "Vintage Illustrative",
        prompt_fragment: "vintage-illustrative masterpiece, sepia tone, high-detail hand-drawn etching on aged paper. The central visual is in an engraved style with cross-hatching shading. Emphasize symmetry, botanical ornaments (kamboja/melati/padi), and vintage typography.",
    },
    StyleEntry {
        id: "modern_flat",
        label: "Modern Flat Design",
        prompt_fragment: "modern flat design masterpiece, vibrant brand colors, clean lines, minimalist icons, sans-serif typography. The central visual is a stylized flat vector illustration. Emphasize clarity, negative space, and a clean grid layout.",
    },
    StyleEntry {
        id: "3d_render",
        label: "3D Render (Clay/Glossy)",
        prompt_fragment: "high-fidelity 3D render style, claymorphism or glossy plastic textures, soft studio lighting, pastel color palette, rounded shapes. The central visual is a cute but detailed 3D character or object. Emphasize depth, soft shadows, and a playful yet professional look.",
    },
    StyleEntry {
        id: "3d_realistic",
        label: "3D Realistis",
        prompt_fragment: "hyper-realistic 3D render masterpiece, cinematic lighting, 8k resolution, photorealistic textures, ray-traced shadows. The central visual appears as a high-fidelity physical model or product shot. Emphasize material accuracy, atmospheric lighting, and depth of field.",
    },
    StyleEntry {
        id: "futuristic",
        label: "Futuristic / Cyberpunk",
        prompt_fragment: "futuristic cyberpunk aesthetic, dark background with neon glowing lines (cyan, magenta), HUD interface elements, holographic data visualization. The central visual is a high-tech glowing wireframe or hologram. Emphasize technology, digital complexity, and high contrast.",
    },
    StyleEntry {
        id: "glowing_neon",
        label: "Glowing Neon / Synthwave",
        prompt_fragment: "glowing neon art style, synthwave aesthetic, vibrant pink and cyan lights on dark grid background, retro-futuristic vibe. The central visual is outlined in bright neon tubes. Emphasize contrast, electricity, and 80s nostalgia.",
    },
    StyleEntry {
        id: "watercolor",
        label: "Watercolor Painting",
        prompt_fragment: "artistic watercolor painting style, soft edges, color bleeding effects, textured paper background, handwritten-style typography. The central visual is a beautiful watercolor portrait/object with gentle washes of color. Emphasize artistry, organic shapes, and a light, airy feel.",
    },
    StyleEntry {
        id: "blueprint",
        label: "Technical Blueprint",
        prompt_fragment: "technical blueprint style, white lines on a blue background, precise schematic diagrams, grid lines, and technical annotation typography. The central visual is a detailed technical drawing or exploded view. Emphasize precision, accuracy, and detailed annotations.",
    },
    StyleEntry {
        id: "vintage_blueprint",
        label: "Vintage Blueprint",
        prompt_fragment: "vintage cyanotype blueprint style, worn dark blue paper texture, faded white technical lines, engineering schematics, grid overlay, aged edges. The central visual is a detailed technical diagram from the 19th century. Emphasize history, mechanical detail, and archival quality.",
    },
    StyleEntry {
        id: "isometric",
        label: "Isometric 3D",
        prompt_fragment: "isometric 3D vector art, clean shadows, vibrant gradients, geometric shapes, and modern sans-serif typography. The central visual is a detailed 3D isometric illustration of the main subject. Emphasize depth, perspective, and a clean, tech-inspired aesthetic.",
    },
    StyleEntry {
        id: "3d_loaded",
        label: "3D Loaded View",
        prompt_fragment: "3D loaded view, isometric cutaway or knolling style, densely packed with detailed objects, high-fidelity rendering, vibrant colors, soft studio lighting. The central visual is a rich composition of many small elements forming a cohesive whole. Emphasize complexity, depth, and a toy-like matte finish.",
    },
    StyleEntry {
        id: "paper_cutout",
        label: "Paper Cutout Craft",
        prompt_fragment: "digital paper cutout style, layered paper craft, soft drop shadows for depth, textured paper grain, vibrant but matte colors. The central visual is composed of stacked paper layers. Emphasize tactile feel, craft, and dimensionality.",
    },
    StyleEntry {
        id: "pop_art",
        label: "Pop Art Comic",
        prompt_fragment: "pop art comic style, Roy Lichtenstein inspired, bold black outlines, vibrant primary colors, halftone dots pattern. The central visual is dynamic and expressive. Emphasize retro comic aesthetics and bold graphic impact.",
    },
    StyleEntry {
        id: "wooden_carved",
        label: "Wooden Carved",
        prompt_fragment: "intricate wood carving style, bas-relief sculpture effect, realistic wood grain texture, warm lighting, handcrafted aesthetic. The central visual appears to be carved from solid wood with deep shadows and highlights. Emphasize texture, craftsmanship, and a rustic yet elegant feel.",
    },
    StyleEntry {
        id: "chalkboard",
        label: "Chalkboard Educational",
        prompt_fragment: "chalkboard illustration style, white chalk texture on dark green slate, dusty effects, hand-drawn educational diagrams. The central visual looks like a professor's drawing. Emphasize learning, rustic texture, and hand-written elements.",
    },
    StyleEntry {
        id: "pixel_art",
        label: "Retro Pixel Art",
        prompt_fragment: "16-bit pixel art, retro video game aesthetic, crisp square pixels, limited color palette, dithering shading. The central visual is a sprite illustration. Emphasize nostalgia, digital precision, and arcade gaming feel.",
    },
    StyleEntry {
        id: "claymation",
        label: "Claymation / Stop Motion",
        prompt_fragment: "stop-motion claymation style, plasticine texture, fingerprints visible, soft studio lighting, shallow depth of field. The central visual looks like a handmade clay model. Emphasize tactility, playfulness, and physical material.",
    },
    StyleEntry {
        id: "minimalist_line_art",
        label: "Minimalist Line Art",
        prompt_fragment: "minimalist line art, single continuous line drawing, black and white, clean aesthetic, focus on form, no shading.",
    },
    StyleEntry {
        id: "knitted_art",
        label: "Knitted Art",
        prompt_fragment: "knitted art style, realistic wool texture, intricate yarn loops, crochet patterns, soft studio lighting, cozy warm atmosphere. The central visual is crafted entirely from yarn with visible stitch details. Emphasize tactile texture, softness, and a handmade craft aesthetic.",
    },
    StyleEntry {
        id: "abstract_geometric",
        label: "Abstract Geometric",
        prompt_fragment: "abstract geometric design, clean shapes, bold color blocking, minimalist aesthetic, vector art",
    },
];

/// Look up a style entry by id
pub fn find_style(id: &str) -> Option<&'static StyleEntry> {
    VISUAL_STYLES.iter().find(|s| s.id == id)
}

/// Prompt fragment for a style id; an unknown id is its own fragment
pub fn style_fragment(id: &str) -> &str {
    find_style(id).map(|s| s.prompt_fragment).unwrap_or(id)
}
