//! Infographic brief domain module

mod attachment;
mod description;
mod section;
mod style;

pub use attachment::{AttachmentData, AttachmentMimeType};
pub use description::{ContentDescription, SidePanels, BRAND_SIGNATURE};
pub use section::Section;
pub use style::{AspectRatio, StyleConfig, ALL_ASPECT_RATIOS, DEFAULT_VISUAL_STYLE};
