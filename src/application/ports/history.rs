//! History storage port interface

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::brief::{ContentDescription, StyleConfig};

/// History storage errors
#[derive(Debug, Clone, Error)]
pub enum HistoryError {
    #[error("Failed to read history: {0}")]
    ReadError(String),

    #[error("Failed to write history: {0}")]
    WriteError(String),

    #[error("No history entry with id '{0}'")]
    NotFound(String),
}

/// A saved form snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique id, the save timestamp in milliseconds as a string
    pub id: String,
    /// Save time in unix milliseconds
    pub timestamp_ms: u64,
    /// Display name, the title at save time or "Untitled Infographic"
    pub name: String,
    pub description: ContentDescription,
    pub style: StyleConfig,
}

impl HistoryEntry {
    pub fn new(
        timestamp_ms: u64,
        description: ContentDescription,
        style: StyleConfig,
    ) -> Self {
        let name = if description.title.trim().is_empty() {
            "Untitled Infographic".to_string()
        } else {
            description.title.clone()
        };
        Self {
            id: timestamp_ms.to_string(),
            timestamp_ms,
            name,
            description,
            style,
        }
    }

    /// Override the display name, keeping the default when blank
    pub fn with_name(mut self, name: &str) -> Self {
        if !name.trim().is_empty() {
            self.name = name.trim().to_string();
        }
        self
    }
}

/// Port for history persistence
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load all entries, newest first.
    async fn load_all(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Persist a new entry at the front of the list.
    async fn save(&self, entry: &HistoryEntry) -> Result<(), HistoryError>;

    /// Delete the entry with the given id.
    async fn delete(&self, id: &str) -> Result<(), HistoryError>;

    /// Remove all entries.
    async fn clear(&self) -> Result<(), HistoryError>;

    /// Get the history file path.
    fn path(&self) -> PathBuf;
}
