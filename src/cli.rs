// CLI module - command-line argument parsing and handlers
//
// With no subcommand the TUI starts. Subcommands:
// - generate: One-shot caption generation, printed to stdout
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Print config file path

use crate::config::{Config, VERSION};
use crate::session::Tone;
use clap::{Args, Parser, Subcommand};
use std::io::Write;

/// Gen-Z Hype Machine - turn product specs into social captions
#[derive(Parser)]
#[command(name = "hype")]
#[command(version = VERSION)]
#[command(
    about = "Turn boring product specs into main-character captions",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate captions without the TUI
    Generate(GenerateArgs),

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Key features, free text
    #[arg(long)]
    pub features: String,

    /// Caption vibe (defaults to the configured default_tone)
    #[arg(long, value_enum, ignore_case = true)]
    pub tone: Option<Tone>,

    /// Print the captions as a numbered thread
    #[arg(long)]
    pub thread: bool,

    /// Copy the thread payload to the clipboard
    #[arg(long)]
    pub copy: bool,
}

pub fn handle_config_command(show: bool, reset: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else {
        // No flag provided, show help
        println!("Usage: hype config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();
    print!("{}", render_effective(&config));

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

/// Effective settings, with the API key reduced to a fingerprint
fn render_effective(config: &Config) -> String {
    let api_key = match config.api_key_fingerprint() {
        Some(fp) => format!("set (sha256:{})", fp),
        None => "not set".to_string(),
    };

    format!(
        "# Effective configuration (env > file > defaults)\n\
         \n\
         api_base = {:?}\n\
         model = {:?}\n\
         api_key = {}\n\
         default_tone = {:?}\n\
         theme = {:?}\n\
         \n\
         [logging]\n\
         level = {:?}\n\
         file_enabled = {}\n\
         file_dir = {:?}\n\
         file_rotation = {:?}\n\
         file_prefix = {:?}\n",
        config.api_base,
        config.model,
        api_key,
        config.default_tone.as_str(),
        config.theme,
        config.logging.level,
        config.logging.file_enabled,
        config.logging.file_dir.display().to_string(),
        config.logging.file_rotation.as_str(),
        config.logging.file_prefix,
    )
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_parses_tone_case_insensitively() {
        let cli = Cli::try_parse_from([
            "hype", "generate", "--name", "Balm", "--features", "neon", "--tone", "SASSY",
            "--thread",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.name, "Balm");
                assert_eq!(args.tone, Some(Tone::Sassy));
                assert!(args.thread);
                assert!(!args.copy);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["hype"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn effective_config_never_prints_key() {
        let config = Config {
            api_key: Some("super-secret-key".into()),
            ..Config::default()
        };

        let shown = render_effective(&config);
        assert!(!shown.contains("super-secret-key"));
        assert!(shown.contains("api_key = set (sha256:"));
    }
}
