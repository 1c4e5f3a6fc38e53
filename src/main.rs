//! redraft — CLI entry point.
//!
//! Argument parsing and dispatch only; the work happens in commands.rs
//! and the llm module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use redraft::commands;

#[derive(Parser)]
#[command(
    name = "redraft",
    version,
    about = "Transform text and images through an OpenAI-compatible chat API"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a task against the configured API
    Run {
        /// Task identifier (see `redraft tasks`)
        task: String,
        /// Text to transform; falls back to --file, then piped stdin
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Attach an image (repeatable; order is preserved)
        #[arg(long = "image", value_name = "PATH")]
        images: Vec<PathBuf>,
    },
    /// List the available tasks
    Tasks,
    /// Read or change stored settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print one setting
    Get { key: String },
    /// Store one setting
    Set { key: String, value: String },
    /// Print all settings (API key masked)
    Show,
    /// Print the settings file location
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local env files seed the REDRAFT_* overrides; first match wins.
    for env_file in [".env.local", ".env"] {
        let path = std::path::Path::new(env_file);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(path) {
                eprintln!("[STARTUP] Failed to load {}: {}", env_file, e);
            }
            break;
        }
    }

    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            task,
            text,
            file,
            images,
        } => commands::run_task(&task, text, file, &images).await,
        Command::Tasks => {
            commands::list_tasks();
            Ok(())
        }
        Command::Settings { action } => match action {
            SettingsAction::Get { key } => commands::settings_get(&key),
            SettingsAction::Set { key, value } => commands::settings_set(&key, &value),
            SettingsAction::Show => {
                commands::settings_show();
                Ok(())
            }
            SettingsAction::Path => {
                commands::settings_location();
                Ok(())
            }
        },
    }
}
