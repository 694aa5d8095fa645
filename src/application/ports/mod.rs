//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod history;
pub mod planner;

// Re-export common types
pub use config::ConfigStore;
pub use history::{HistoryEntry, HistoryError, HistoryStore};
pub use planner::{ContentPlan, ContentPlanner, PlanSource, PlannerError};
