//! Attachment data value object

use std::fmt;

/// Supported attachment media types for content-plan analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentMimeType {
    Pdf,
    Png,
    Jpeg,
    Webp,
}

impl AttachmentMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    /// Resolve a media type from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }
}

impl fmt::Display for AttachmentMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value object representing a binary payload (PDF or reference image)
/// ready to be sent for content-plan analysis.
#[derive(Debug, Clone)]
pub struct AttachmentData {
    data: Vec<u8>,
    mime_type: AttachmentMimeType,
}

impl AttachmentData {
    /// Create AttachmentData from raw bytes
    pub fn new(data: Vec<u8>, mime_type: AttachmentMimeType) -> Self {
        Self { data, mime_type }
    }

    /// Get the raw payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> AttachmentMimeType {
        self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Encode the payload as base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}
