//! Share command handler

use crate::domain::brief::StyleConfig;
use crate::infrastructure::project::{self, ProjectFile};
use crate::infrastructure::share::{self, SharePayload};

use super::args::ShareAction;
use super::presenter::Presenter;

/// Handle share subcommand
pub async fn handle_share_command(
    action: ShareAction,
    presenter: &Presenter,
) -> Result<(), String> {
    match action {
        ShareAction::Encode { project, label } => {
            let loaded = project::load(&project).await.map_err(|e| e.to_string())?;
            let payload = SharePayload {
                description: loaded.description(),
                style: loaded
                    .style_or(StyleConfig::default())
                    .map_err(|e| e.to_string())?,
                label: label.filter(|l| !l.trim().is_empty()),
            };
            let token = share::encode(&payload).map_err(|e| e.to_string())?;
            presenter.output(&token);
            Ok(())
        }
        ShareAction::Decode { token, out } => {
            // An unreadable token is reported and otherwise ignored
            let payload = match share::decode(&token) {
                Ok(payload) => payload,
                Err(e) => {
                    presenter.warn(&format!("Ignoring invalid share token: {}", e));
                    return Ok(());
                }
            };

            if let Some(label) = &payload.label {
                presenter.info(&format!("Template: {}", label));
            }

            let result = ProjectFile::from_parts(&payload.description, &payload.style);
            match out {
                Some(path) => {
                    project::save(&path, &result)
                        .await
                        .map_err(|e| e.to_string())?;
                    presenter.success(&format!("Project written to {}", path.display()));
                }
                None => {
                    let text = result.to_toml_string().map_err(|e| e.to_string())?;
                    presenter.output(&text);
                }
            }
            Ok(())
        }
    }
}
