//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

/// InfoPrompt - guided infographic prompt and caption builder
#[derive(Parser, Debug)]
#[command(name = "infoprompt")]
#[command(version)]
#[command(about = "Deterministic infographic prompt and caption builder with Gemini auto-fill")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the image prompt and caption from a project file
    Render {
        /// Project file (.toml or .json)
        project: PathBuf,

        /// Visual style id, overriding the project and config
        #[arg(long, value_name = "ID")]
        style: Option<String>,

        /// Aspect ratio (9:16, 3:4, 1:1, 4:3, 16:9)
        #[arg(long, value_name = "RATIO")]
        ratio: Option<String>,

        /// Print only the image prompt
        #[arg(long, conflicts_with = "caption_only")]
        prompt_only: bool,

        /// Print only the caption
        #[arg(long)]
        caption_only: bool,
    },
    /// Auto-fill a project from a topic, PDF, or reference image
    Autofill(AutofillArgs),
    /// List the visual style catalog
    Styles,
    /// Manage saved form snapshots
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Encode or decode share tokens
    Share {
        #[command(subcommand)]
        action: ShareAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Auto-fill arguments. Exactly one source is required.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["topic", "pdf", "image"])))]
pub struct AutofillArgs {
    /// Topic or angle for the content plan
    #[arg(long, value_name = "TEXT")]
    pub topic: Option<String>,

    /// PDF file to extract data from
    #[arg(long, value_name = "FILE")]
    pub pdf: Option<PathBuf>,

    /// Reference image whose structure should be mimicked
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Project file providing prior form values
    #[arg(long, value_name = "PROJECT")]
    pub base: Option<PathBuf>,

    /// Write the resulting project to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Gemini model to use
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Visual style id for the rendered outputs
    #[arg(long, value_name = "ID")]
    pub style: Option<String>,

    /// Aspect ratio for the rendered outputs
    #[arg(long, value_name = "RATIO")]
    pub ratio: Option<String>,
}

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List saved snapshots, newest first
    List,
    /// Print a saved snapshot as a project
    Show {
        /// Entry id
        id: String,
    },
    /// Save a project file as a snapshot
    Save {
        /// Project file (.toml or .json)
        project: PathBuf,

        /// Display name for the snapshot
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },
    /// Delete a snapshot
    Delete {
        /// Entry id
        id: String,
    },
    /// Delete all snapshots
    Clear,
}

/// Share subcommands
#[derive(Subcommand, Debug)]
pub enum ShareAction {
    /// Print a share token for a project file
    Encode {
        /// Project file (.toml or .json)
        project: PathBuf,

        /// Template label carried inside the token
        #[arg(long, value_name = "LABEL")]
        label: Option<String>,
    },
    /// Decode a share token back into a project
    Decode {
        /// The token to decode
        token: String,

        /// Write the decoded project to this file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "model", "visual_style", "aspect_ratio"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
