//! History command handler

use std::time::{SystemTime, UNIX_EPOCH};

use crate::application::ports::{HistoryEntry, HistoryStore};
use crate::domain::brief::StyleConfig;
use crate::infrastructure::project::{self, ProjectFile};

use super::args::HistoryAction;
use super::presenter::Presenter;

/// Handle history subcommand
pub async fn handle_history_command<S: HistoryStore>(
    action: HistoryAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), String> {
    match action {
        HistoryAction::List => handle_list(store, presenter).await,
        HistoryAction::Show { id } => handle_show(store, presenter, &id).await,
        HistoryAction::Save { project, name } => {
            handle_save(store, presenter, &project, name.as_deref()).await
        }
        HistoryAction::Delete { id } => {
            store.delete(&id).await.map_err(|e| e.to_string())?;
            presenter.success(&format!("Deleted history entry {}", id));
            Ok(())
        }
        HistoryAction::Clear => {
            store.clear().await.map_err(|e| e.to_string())?;
            presenter.success("History cleared");
            Ok(())
        }
    }
}

async fn handle_list<S: HistoryStore>(store: &S, presenter: &Presenter) -> Result<(), String> {
    let entries = store.load_all().await.map_err(|e| e.to_string())?;

    if entries.is_empty() {
        presenter.info(&format!("No history entries ({})", store.path().display()));
        return Ok(());
    }

    for entry in entries {
        presenter.key_value(&entry.id, &entry.name);
    }
    Ok(())
}

async fn handle_show<S: HistoryStore>(
    store: &S,
    presenter: &Presenter,
    id: &str,
) -> Result<(), String> {
    let entries = store.load_all().await.map_err(|e| e.to_string())?;
    let entry = entries
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| format!("No history entry with id '{}'", id))?;

    let project = ProjectFile::from_parts(&entry.description, &entry.style);
    let text = project.to_toml_string().map_err(|e| e.to_string())?;
    presenter.output(&text);
    Ok(())
}

async fn handle_save<S: HistoryStore>(
    store: &S,
    presenter: &Presenter,
    project_path: &std::path::Path,
    name: Option<&str>,
) -> Result<(), String> {
    let project = project::load(project_path).await.map_err(|e| e.to_string())?;
    let description = project.description();
    let style = project
        .style_or(StyleConfig::default())
        .map_err(|e| e.to_string())?;

    let entry = HistoryEntry::new(now_millis(), description, style)
        .with_name(name.unwrap_or_default());

    store.save(&entry).await.map_err(|e| e.to_string())?;
    presenter.success(&format!("Saved '{}' as entry {}", entry.name, entry.id));
    Ok(())
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
