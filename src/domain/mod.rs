//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod brief;
pub mod catalog;
pub mod config;
pub mod error;
pub mod synthesis;

// Re-export common types
pub use brief::{
    AspectRatio, AttachmentData, AttachmentMimeType, ContentDescription, Section, SidePanels,
    StyleConfig, BRAND_SIGNATURE, DEFAULT_VISUAL_STYLE,
};
pub use config::AppConfig;
pub use error::*;
pub use synthesis::{synthesize, SynthesisOutput};
