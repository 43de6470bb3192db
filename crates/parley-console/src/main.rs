//! Parley console binary.
//!
//! Loads configuration, initialises structured logging and then drives one
//! training session from stdin until `quit` or end of input.

use std::io::{self, BufRead, Write};

use parley_console::{load_config, Command, Console, Outcome};
use parley_training::RandomDurations;
use tracing_subscriber::EnvFilter;

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Some(path) = std::env::args()
        .nth(1)
        .filter(|value| !value.trim().is_empty())
    {
        return (Some(path), "cli-arg");
    }

    if let Ok(path) = std::env::var("PARLEY_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }

    (None, "default")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().or(Some("parley.toml"));

    let config = load_config(selected_config_path)?;

    // Logs go to stderr so stdout carries only command output.
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        agent = %config.session.agent_id,
        "resolved startup configuration path"
    );

    let mut console = Console::new(&config, RandomDurations::default())?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = line
            .parse::<Command>()
            .and_then(|command| console.execute(command));
        match outcome {
            Ok(Outcome::Print(text)) => writeln!(stdout, "{text}")?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                tracing::warn!(error = %e, line = %line, "skipped malformed command");
                eprintln!("error: {e}");
            }
        }
    }

    tracing::info!("console closed");
    Ok(())
}
