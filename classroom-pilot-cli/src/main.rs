//! Classroom Pilot CLI
//!
//! Drives a running classroom client from the command line. Every command
//! pops out the classroom's windows first, then prints its result as JSON.
//!
//! Usage:
//!   classroom-pilot --config pilot.yaml scrape-chat
//!   classroom-pilot --config pilot.yaml send-message "Let's begin"
//!   classroom-pilot --config pilot.yaml send-editor --language Python --index 1 "print(1)"
//!   classroom-pilot classify "Python Editor 3"

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use classroom_pilot::{classify, create_engine, ControllerOptions, WindowManager};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "classroom-pilot")]
#[command(about = "Drive a multi-window tutoring classroom from the command line")]
struct Cli {
    /// Path to the controller options file (JSON or YAML)
    #[arg(long, short, env = "CLASSROOM_PILOT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pop out every classroom window and list the controllers found
    Open,
    /// Print the public chat transcript
    ScrapeChat,
    /// Send a message to the public chat
    SendMessage {
        text: String,
    },
    /// Print the contents of every code editor
    ScrapeEditors,
    /// Type text into one code editor
    SendEditor {
        #[arg(long)]
        language: String,
        #[arg(long)]
        index: u32,
        text: String,
    },
    /// Print the contents of every word processor
    ScrapeWordProcessors,
    /// Print the screenshare window, if one is open
    ScrapeScreenshare,
    /// Report whether a screenshare window is open
    ScreenshareOpen,
    /// Add a new code editor to the classroom
    InsertEditor,
    /// End the current session
    EndSession,
    /// Show how a window title would be classified (no desktop access)
    Classify {
        title: String,
    },
}

fn main() -> Result<()> {
    // a missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging()?;

    if let Commands::Classify { title } = &cli.command {
        return print_json(&classify(title)?);
    }

    let Some(config_path) = cli.config.as_deref() else {
        bail!("--config (or CLASSROOM_PILOT_CONFIG) is required for this command");
    };
    let options = load_options(config_path)?;
    let engine = create_engine().context("Failed to create automation engine")?;
    let mut manager = WindowManager::new(engine, options).context("Invalid controller options")?;

    match cli.command {
        Commands::Open => {
            manager.open_all_windows()?;
            print_json(&manager.registry().identities())
        }
        Commands::ScrapeChat => print_json(&manager.scrape_public_chat()?),
        Commands::SendMessage { text } => {
            manager.send_message(&text)?;
            tracing::info!("Message sent");
            Ok(())
        }
        Commands::ScrapeEditors => print_json(&manager.scrape_code_editors()?),
        Commands::SendEditor {
            language,
            index,
            text,
        } => {
            if !manager.send_text_to_code_editor(&language, index, &text)? {
                bail!("No {language} Editor {index} is open");
            }
            Ok(())
        }
        Commands::ScrapeWordProcessors => print_json(&manager.scrape_word_processors()?),
        Commands::ScrapeScreenshare => print_json(&manager.scrape_screenshare()?),
        Commands::ScreenshareOpen => print_json(&manager.is_screenshare_open()?),
        Commands::InsertEditor => Ok(manager.insert_code_editor()?),
        Commands::EndSession => Ok(manager.end_session()?),
        Commands::Classify { .. } => unreachable!("handled before loading options"),
    }
}

fn init_logging() -> Result<()> {
    let log_level = env::var("LOG_LEVEL")
        .map(|level| match level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            _ => Level::INFO,
        })
        .unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    Ok(())
}

/// Reads controller options, picking the format from the file extension.
fn load_options(path: &Path) -> Result<ControllerOptions> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_options(&raw, path)
}

fn parse_options(raw: &str, path: &Path) -> Result<ControllerOptions> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let options: ControllerOptions = match extension.as_deref() {
        Some("json") => serde_json::from_str(raw)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(raw)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
        other => bail!(
            "Unsupported config format {:?} for {}; use .json, .yaml or .yml",
            other.unwrap_or(""),
            path.display()
        ),
    };

    options.validate()?;
    Ok(options)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
tutor_profile:
  first_name: Jamie
  last_initial: R
coords:
  public_chat_pop_out: { x: 1890, y: 40 }
  public_chat_text_box: { x: 1700, y: 980 }
  end_session_button: { x: 60, y: 20 }
  confirm_end_session_button: { x: 960, y: 600 }
timing:
  stall_threshold: 3
"#;

    #[test]
    fn parses_yaml_options() {
        let options = parse_options(YAML, Path::new("pilot.yaml")).unwrap();
        assert_eq!(options.tutor_profile.display_name(), "Jamie R.");
        assert_eq!(options.timing.stall_threshold, 3);
        assert_eq!(options.timing.open_settle_ms, 500);
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = parse_options(YAML, Path::new("pilot.toml")).unwrap_err();
        assert!(err.to_string().contains("Unsupported config format"));
    }

    #[test]
    fn validation_errors_surface() {
        let bad = YAML.replace("last_initial: R", "last_initial: Rx");
        assert!(parse_options(&bad, Path::new("pilot.yml")).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_options(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
