//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the Gemini API and the local filesystem.

pub mod config;
pub mod history;
pub mod planner;
pub mod project;
pub mod share;

// Re-export adapters
pub use config::XdgConfigStore;
pub use history::JsonFileHistory;
pub use planner::GeminiPlanner;
