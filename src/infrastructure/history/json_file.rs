//! JSON-file history store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{HistoryEntry, HistoryError, HistoryStore};

/// History store backed by a single JSON file in the user data directory
pub struct JsonFileHistory {
    path: PathBuf,
}

impl JsonFileHistory {
    /// Create a new history store with default path
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("infoprompt");

        Self {
            path: data_dir.join("history.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn write_entries(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HistoryError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| HistoryError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| HistoryError::WriteError(e.to_string()))
    }
}

impl Default for JsonFileHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for JsonFileHistory {
    async fn load_all(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| HistoryError::ReadError(e.to_string()))?;

        // A corrupted file must never kill the session
        let mut entries: Vec<HistoryEntry> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!(
                    "Warning: history file {} is corrupted, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        };

        for entry in &mut entries {
            entry.description.sanitize();
        }

        Ok(entries)
    }

    async fn save(&self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        let mut entries = self.load_all().await?;
        entries.insert(0, entry.clone());
        self.write_entries(&entries).await
    }

    async fn delete(&self, id: &str) -> Result<(), HistoryError> {
        let mut entries = self.load_all().await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(HistoryError::NotFound(id.to_string()));
        }
        self.write_entries(&entries).await
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        self.write_entries(&[]).await
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
