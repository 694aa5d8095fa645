//! InfoPrompt - guided infographic prompt and caption builder
//!
//! This crate turns a structured content description into a text-to-image
//! generation prompt and a matching social-media caption, deterministically,
//! with an optional Gemini-backed auto-fill for the content itself.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Content description, style catalogs, the synthesizer, errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, JSON history,
//!   TOML config, share codec, project files)
//! - **CLI**: Command-line interface and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
