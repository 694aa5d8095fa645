//! Social-media caption assembly

use crate::domain::brief::{ContentDescription, StyleConfig, BRAND_SIGNATURE};

struct CaptionVoice {
    hook: &'static str,
    action_verb: &'static str,
    closing_cta: &'static str,
}

const DEFAULT_VOICE: CaptionVoice = CaptionVoice {
    hook: "👋 **Halo Sobat Visual!**",
    action_verb: "Simak rangkuman",
    closing_cta: "Semoga bermanfaat!",
};

fn voice_for(purpose: &str) -> CaptionVoice {
    match purpose {
        "marketing" => CaptionVoice {
            hook: "🚀 **TINGKATKAN BISNIS KAMU!**",
            action_verb: "Cek detail penawaran menarik",
            closing_cta: "🔥 **Tertarik? Hubungi kami segera!**",
        },
        "education" => CaptionVoice {
            hook: "📚 **FAKTA MENARIK HARI INI!**",
            action_verb: "Pelajari wawasan baru",
            closing_cta: "📌 **Save postingan ini buat belajar nanti!**",
        },
        "history" => CaptionVoice {
            hook: "🕰️ **JELAJAH WAKTU**",
            action_verb: "Ungkap kisah masa lalu",
            closing_cta: "Bagikan ke teman pecinta sejarah!",
        },
        "social_media" => CaptionVoice {
            hook: "✨ **LAGI TRENDING NIH!**",
            action_verb: "Intip infonya",
            closing_cta: "Tag teman kamu yang perlu tau info ini!",
        },
        "report" => CaptionVoice {
            hook: "📈 **DATA INSIGHT**",
            action_verb: "Analisis data terbaru",
            closing_cta: "Simpan untuk referensi datamu.",
        },
        _ => DEFAULT_VOICE,
    }
}

struct HashtagRule {
    needles: &'static [&'static str],
    tags: &'static str,
}

/// Style hashtag groups, accumulated by substring match in fixed order
const HASHTAG_RULES: &[HashtagRule] = &[
    HashtagRule {
        needles: &["vintage"],
        tags: "#VintageStyle #RetroArt #ClassicDesign ",
    },
    HashtagRule {
        needles: &["3d"],
        tags: "#3DDesign #DigitalArt #Render ",
    },
    HashtagRule {
        needles: &["flat"],
        tags: "#FlatDesign #Minimalist #VectorArt ",
    },
    HashtagRule {
        needles: &["neon", "cyber"],
        tags: "#Cyberpunk #NeonVibes #Futuristic ",
    },
    HashtagRule {
        needles: &["paper"],
        tags: "#PaperCraft #Artistic ",
    },
];

fn purpose_tag(purpose: &str) -> String {
    if purpose.is_empty() {
        "Infografis".to_string()
    } else {
        purpose.chars().filter(char::is_ascii_alphanumeric).collect()
    }
}

fn title_tag(title: &str) -> String {
    if title.is_empty() {
        "Info".to_string()
    } else {
        title.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

pub(super) fn build_caption(desc: &ContentDescription, style: &StyleConfig) -> String {
    let voice = voice_for(&desc.purpose);

    let mut caption = format!("{}\n\n", voice.hook);
    caption.push_str(&format!("📊 **{}**\n", desc.title.to_uppercase()));
    if !desc.subtitle.is_empty() {
        caption.push_str(&format!("_{}_\n", desc.subtitle));
    }
    caption.push('\n');

    caption.push_str(&format!(
        "{} tentang {} dalam rangkuman visual ini.\n\n",
        voice.action_verb, desc.title
    ));
    caption.push_str("💡 **Poin-Poin Utama:**\n");

    for section in &desc.sections {
        caption.push_str(&format!("✅ {}\n", section.title));
        if !section.text.is_empty() {
            caption.push_str(&format!("   └ {}\n", section.lead_point()));
        }
    }

    caption.push('\n');
    if !desc.sources.is_empty() {
        caption.push_str(&format!("📚 Sumber: {}\n", desc.sources));
    }
    caption.push_str(&format!("\n{}\n", voice.closing_cta));

    caption.push_str("\n----------------------------------\n");
    caption.push_str("✨ **Ingin konten visual sekeren ini?**\n");
    caption.push_str("🚀 Yuk, buat infografis profesional sekarang! Klik link di Bio.\n");
    caption.push_str("----------------------------------\n\n");

    caption.push_str(&format!("🎨 Design by: {}\n", BRAND_SIGNATURE));
    caption.push_str(&format!(
        "#Infografis #{} #Edukasi #VisualData #{} ",
        purpose_tag(&desc.purpose),
        title_tag(&desc.title)
    ));

    for rule in HASHTAG_RULES {
        if rule
            .needles
            .iter()
            .any(|needle| style.visual_style.contains(needle))
        {
            caption.push_str(rule.tags);
        }
    }

    caption
}
