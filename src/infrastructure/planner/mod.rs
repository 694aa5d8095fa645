//! Content planning adapters

mod gemini;

pub use gemini::GeminiPlanner;
