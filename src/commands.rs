//! CLI command handlers.
//!
//! Thin orchestration: gather input, resolve settings, call the
//! completion client, print. Each invocation runs one request to
//! completion and exits with either the result or a single error
//! message; nothing is left half-done.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Context;

use crate::encode;
use crate::llm::{prompts, CompletionClient};
use crate::settings::{self, Settings};

/// Run one task: assemble text and images, send a single request, print
/// the transformed result to stdout.
pub async fn run_task(
    task: &str,
    text: Option<String>,
    file: Option<PathBuf>,
    images: &[PathBuf],
) -> anyhow::Result<()> {
    let text = gather_text(text, file)?;
    if text.is_empty() && images.is_empty() {
        anyhow::bail!("nothing to send — pass text, --file, or --image");
    }

    if prompts::instruction_for(task).is_none() {
        log::warn!(
            "[LLM] Unknown task '{}' — sending text without an instruction prefix",
            task
        );
    }

    // Command-line order is transmission order.
    let mut data_uris = Vec::with_capacity(images.len());
    for path in images {
        data_uris.push(encode::data_uri_for(path)?);
    }

    let config = Settings::load().resolve_api_config();
    if config.host.is_empty() {
        anyhow::bail!("API host is not set — run `redraft settings set apiHost <url>` first");
    }

    let client = CompletionClient::new(config);
    let result = client.complete(task, &text, &data_uris).await?;
    println!("{}", result);
    Ok(())
}

/// Text precedence: positional argument, then --file, then piped stdin.
fn gather_text(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

/// Print the task table.
pub fn list_tasks() {
    for (id, description) in prompts::TASKS {
        println!("{:<14}{}", id, description);
    }
}

/// `settings get <key>`.
pub fn settings_get(key: &str) -> anyhow::Result<()> {
    match Settings::load().get(key) {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => anyhow::bail!("unknown setting '{}' (expected apiHost, apiKey, or theme)", key),
    }
}

/// `settings set <key> <value>`.
pub fn settings_set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut settings = Settings::load();
    settings.set(key, value)?;
    settings.save()
}

/// `settings show` — everything at once, API key masked.
pub fn settings_show() {
    let settings = Settings::load();
    println!("apiHost  {}", settings.api_host);
    println!("apiKey   {}", mask_key(&settings.api_key));
    println!("theme    {}", settings.theme);
}

/// `settings path`.
pub fn settings_location() {
    println!("{}", settings::settings_path().display());
}

/// Keep only the last four characters of the key visible.
fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    let chars: Vec<char> = key.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("****{tail}")
}
