//! InfoPrompt CLI entry point

use std::process::ExitCode;

use clap::Parser;

use infoprompt::cli::{
    app::{run_autofill, run_render, run_styles, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    history_cmd::handle_history_command,
    presenter::Presenter,
    share_cmd::handle_share_command,
};
use infoprompt::infrastructure::{JsonFileHistory, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Render {
            project,
            style,
            ratio,
            prompt_only,
            caption_only,
        } => run_render(project, style, ratio, prompt_only, caption_only).await,
        Commands::Autofill(args) => run_autofill(args).await,
        Commands::Styles => run_styles(),
        Commands::History { action } => {
            let store = JsonFileHistory::new();
            if let Err(e) = handle_history_command(action, &store, &presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Share { action } => {
            if let Err(e) = handle_share_command(action, &presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
    }
}
