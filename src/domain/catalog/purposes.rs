//! Purpose catalog

/// One purpose entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurposeEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// All named purposes with their display labels
pub const PURPOSE_OPTIONS: &[PurposeEntry] = &[
    PurposeEntry {
        id: "education",
        label: "Edukasi / Pembelajaran",
    },
    PurposeEntry {
        id: "marketing",
        label: "Marketing / Promosi Produk",
    },
    PurposeEntry {
        id: "social_media",
        label: "Konten Media Sosial (Viral)",
    },
    PurposeEntry {
        id: "report",
        label: "Laporan Bisnis / Data",
    },
    PurposeEntry {
        id: "awareness",
        label: "Kampanye Kesadaran Publik",
    },
    PurposeEntry {
        id: "history",
        label: "Arsip Sejarah / Biografi",
    },
];

/// Display label for a purpose id; an unknown id is its own label
pub fn purpose_label(id: &str) -> &str {
    PURPOSE_OPTIONS
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.label)
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_named_purposes() {
        assert_eq!(PURPOSE_OPTIONS.len(), 6);
    }

    #[test]
    fn known_purpose_has_label() {
        assert_eq!(purpose_label("history"), "Arsip Sejarah / Biografi");
        assert_eq!(purpose_label("marketing"), "Marketing / Promosi Produk");
    }

    #[test]
    fn unknown_purpose_falls_back_to_itself() {
        assert_eq!(purpose_label("company_profile"), "company_profile");
        assert_eq!(purpose_label(""), "");
    }
}
