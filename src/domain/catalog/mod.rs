//! Static catalogs
//!
//! Immutable lookup tables loaded at process start. Lookups by unknown key
//! fall back to the raw key instead of failing.

mod purposes;
mod visual_styles;

pub use purposes::{purpose_label, PurposeEntry, PURPOSE_OPTIONS};
pub use visual_styles::{find_style, style_fragment, StyleEntry, VISUAL_STYLES};
