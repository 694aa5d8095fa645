//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod autofill;
pub mod ports;

// Re-export use cases
pub use autofill::{AutofillError, AutofillUseCase};
