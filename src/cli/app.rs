//! Main app runners for render, autofill, and styles

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::application::ports::{ConfigStore, PlanSource};
use crate::application::AutofillUseCase;
use crate::domain::brief::{AttachmentData, AttachmentMimeType, StyleConfig};
use crate::domain::catalog::VISUAL_STYLES;
use crate::domain::config::AppConfig;
use crate::domain::synthesize;
use crate::infrastructure::project::{self, ProjectFile};
use crate::infrastructure::{GeminiPlanner, XdgConfigStore};

use super::args::AutofillArgs;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the render command
pub async fn run_render(
    project_path: PathBuf,
    style_override: Option<String>,
    ratio_override: Option<String>,
    prompt_only: bool,
    caption_only: bool,
) -> ExitCode {
    let presenter = Presenter::new();
    let config = load_merged_config(AppConfig::empty()).await;

    let project = match project::load(&project_path).await {
        Ok(project) => project,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let style = match resolve_style(&project, &config, style_override, ratio_override) {
        Ok(style) => style,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let description = project.description();
    let output = synthesize(&description, &style);
    if output.is_empty() {
        presenter.warn("Nothing to render: the project has no title, main subject, or sections");
        return ExitCode::from(EXIT_SUCCESS);
    }

    if prompt_only {
        presenter.output(&output.prompt);
    } else if caption_only {
        presenter.output(&output.caption);
    } else {
        presenter.heading("IMAGE PROMPT");
        presenter.output(&output.prompt);
        presenter.heading("CAPTION");
        presenter.output(&output.caption);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Run the autofill command
pub async fn run_autofill(args: AutofillArgs) -> ExitCode {
    let mut presenter = Presenter::new();
    let config = load_merged_config(AppConfig::empty()).await;

    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Prior form values, if any
    let base_project = match args.base {
        Some(ref path) => match project::load(path).await {
            Ok(project) => project,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => ProjectFile::default(),
    };

    let style = match resolve_style(&base_project, &config, args.style, args.ratio) {
        Ok(style) => style,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let source = match build_plan_source(&args.topic, &args.pdf, &args.image).await {
        Ok(source) => source,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let PlanSource::Pdf(data) | PlanSource::Image(data) = &source {
        presenter.info(&format!(
            "Attachment loaded ({}, {})",
            data.mime_type(),
            data.human_readable_size()
        ));
    }

    let model = args.model.as_deref().unwrap_or(config.model_or_default());
    let planner = GeminiPlanner::with_model(api_key, model);
    let use_case = AutofillUseCase::new(planner);

    let base_description = base_project.description();

    presenter.start_spinner("Generating content plan...");
    let description = match use_case.execute(&source, &base_description).await {
        Ok(description) => {
            presenter.spinner_success("Content plan ready");
            description
        }
        Err(e) => {
            presenter.spinner_fail("Content plan failed");
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let result = ProjectFile::from_parts(&description, &style);
    match args.out {
        Some(ref path) => {
            if let Err(e) = project::save(path, &result).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            presenter.success(&format!("Project written to {}", path.display()));
        }
        None => match result.to_toml_string() {
            Ok(text) => {
                presenter.heading("PROJECT");
                presenter.output(&text);
            }
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        },
    }

    let output = synthesize(&description, &style);
    presenter.heading("IMAGE PROMPT");
    presenter.output(&output.prompt);
    presenter.heading("CAPTION");
    presenter.output(&output.caption);

    ExitCode::from(EXIT_SUCCESS)
}

/// Run the styles command
pub fn run_styles() -> ExitCode {
    let presenter = Presenter::new();
    for style in VISUAL_STYLES {
        presenter.key_value(style.id, style.label);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Resolve the effective style: CLI overrides > project values > config
fn resolve_style(
    project: &ProjectFile,
    config: &AppConfig,
    style_override: Option<String>,
    ratio_override: Option<String>,
) -> Result<StyleConfig, String> {
    let defaults = StyleConfig {
        visual_style: config.visual_style_or_default().to_string(),
        aspect_ratio: config.aspect_ratio_or_default(),
    };

    let mut style = project.style_or(defaults).map_err(|e| e.to_string())?;

    if let Some(id) = style_override {
        style.visual_style = id;
    }
    if let Some(raw) = ratio_override {
        style.aspect_ratio = raw.parse().map_err(
            |e: crate::domain::error::InvalidAspectRatioError| e.to_string(),
        )?;
    }

    Ok(style)
}

/// Build the plan source from CLI arguments. Attachment bytes are read
/// here so validation failures surface before any network call.
async fn build_plan_source(
    topic: &Option<String>,
    pdf: &Option<PathBuf>,
    image: &Option<PathBuf>,
) -> Result<PlanSource, String> {
    if let Some(topic) = topic {
        return Ok(PlanSource::Topic(topic.clone()));
    }

    if let Some(path) = pdf {
        let data = read_attachment(path, &[AttachmentMimeType::Pdf]).await?;
        return Ok(PlanSource::Pdf(data));
    }

    if let Some(path) = image {
        let data = read_attachment(
            path,
            &[
                AttachmentMimeType::Png,
                AttachmentMimeType::Jpeg,
                AttachmentMimeType::Webp,
            ],
        )
        .await?;
        return Ok(PlanSource::Image(data));
    }

    // Clap's source group guarantees one of the three is present
    Err("No auto-fill source given".to_string())
}

async fn read_attachment(
    path: &Path,
    allowed: &[AttachmentMimeType],
) -> Result<AttachmentData, String> {
    let mime = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(AttachmentMimeType::from_extension)
        .filter(|m| allowed.contains(m))
        .ok_or_else(|| {
            format!(
                "Unsupported file type for {}. Supported: {}",
                path.display(),
                allowed
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    Ok(AttachmentData::new(bytes, mime))
}

/// Get API key from environment or config file
pub async fn get_api_key() -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Check config file
    let store = XdgConfigStore::new();
    let config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    config.api_key.ok_or_else(|| {
        "Missing API key. Set GEMINI_API_KEY environment variable or run 'infoprompt config set api_key <key>'".to_string()
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
