//! Lab Editor - interactive multi-file text and XML editor
//!
//! Reads one command per line from stdin and runs it against the workspace
//! rooted at `--dir`.

mod commands;
mod line;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{execute, InputLine, Reply};
use editor_workspace::{WordListChecker, Workspace};
use std::io::{self, Write};
use std::path::PathBuf;
use store::SettingsManager;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "lab-editor", about = "Multi-file text and XML editor", version)]
struct Cli {
    /// Workspace directory; relative file names resolve against it
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Asks yes/no questions on stdin
struct StdinPrompt;

impl editor_workspace::ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{question} (y/n) ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let mut manager = SettingsManager::new(&cli.dir);
    let settings = manager
        .load()
        .with_context(|| format!("reading settings in {}", cli.dir.display()))?
        .clone();

    let mut workspace = Workspace::new(&cli.dir, settings);
    match workspace.restore_from_disk() {
        Ok(true) => tracing::info!("restored previous workspace"),
        Ok(false) => {}
        Err(err) => tracing::warn!(error = %err, "could not restore previous workspace"),
    }

    println!("--- Lab Editor ---");
    run(&mut workspace)
}

fn run(workspace: &mut Workspace) -> Result<()> {
    let checker = WordListChecker::english();
    let mut prompt = StdinPrompt;
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            // End of input behaves like `exit`
            workspace.exit(&mut prompt)?;
            return Ok(());
        }

        let words = match line::split_line(&input) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(err) => {
                eprintln!("error: {err}");
                continue;
            }
        };
        let command = match InputLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match execute(workspace, command, &mut prompt, &checker) {
            Ok(Reply::Print(text)) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            Ok(Reply::Quiet) => {}
            Ok(Reply::Exit) => return Ok(()),
            Err(err) => eprintln!("error: {err:#}"),
        }
    }
}
