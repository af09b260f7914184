// Gen-Z Hype Machine - Social caption generator
//
// Takes a product name, a few features and a vibe, asks a generative
// language model for five short captions, and lets the user copy them one
// by one or as a numbered thread.
//
// Architecture:
// - Session (pure state machine): form, validation, request lifecycle, copy acks
// - Generation client (reqwest): one structured-output call per submit
// - TUI (ratatui): form + results, driven by a tokio event loop
// - Headless mode: `hype generate` runs the same state machine once

mod cli;
mod config;
mod generation;
mod headless;
mod logging;
mod session;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use generation::GeminiClient;
use logging::{LogBuffer, LogSink};
use tui::clipboard::SystemClipboard;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config subcommands don't need logging or a client
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        cli::handle_config_command(show, reset, path);
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    // TUI mode captures logs into the buffer (keeps the alternate screen clean);
    // headless mode writes them to stderr so stdout stays pipeable
    let log_buffer = LogBuffer::new();
    let sink = match cli.command {
        Some(Commands::Generate(_)) => LogSink::Stderr,
        _ => LogSink::Tui,
    };
    let file_guard = logging::init(&config.logging, sink, &log_buffer);

    tracing::info!(
        "Hype Machine v{} (model {}, default vibe {})",
        config::VERSION,
        config.model,
        config.default_tone
    );
    if config.api_key_fingerprint().is_none() {
        tracing::warn!(
            "No API key found; set one of {} or api_key in the config file",
            generation::API_KEY_ENV_VARS.join(", ")
        );
    }

    match cli.command {
        Some(Commands::Generate(args)) => {
            let client = GeminiClient::new(&config.api_base, &config.model, config.credentials())
                .context("Failed to create generation client")?;
            let mut stdout = std::io::stdout();
            let ok = headless::run_generate(
                &client,
                &args,
                config.default_tone,
                &mut stdout,
                &mut SystemClipboard,
            )
            .await?;

            if !ok {
                // exit() skips destructors; flush the file log first
                drop(file_guard);
                std::process::exit(1);
            }
            Ok(())
        }
        _ => tui::run_tui(config, log_buffer).await,
    }
}
