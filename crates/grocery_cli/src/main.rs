//! Command-line view layer for the grocery checklist.
//!
//! # Responsibility
//! - Collect input for store operations and render `list()` results.
//! - Own the presentation-only onboarding tip flag.
//!
//! The store is opened here and passed explicitly to each command.

mod commands;
mod config;
mod lookup;
mod output;

use clap::{Parser, Subcommand};
use commands::{Outcome, Store};
use config::Settings;
use grocery_core::db::open_db;
use grocery_core::{RandomCompletion, SqliteUiStateRepository};
use log::{info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "grocery", version, about = "Single-list grocery checklist", long_about = None)]
struct Cli {
    /// SQLite file holding the list.
    #[arg(long, env = "GROCERY_DB_PATH", global = true)]
    db: Option<PathBuf>,

    /// Directory for rolling log files.
    #[arg(long, env = "GROCERY_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every item in insertion order.
    List,
    /// Add an item; words are joined with spaces.
    Add {
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        title: Vec<String>,
    },
    /// Flip an item between active and completed.
    Toggle {
        /// Full id or a unique prefix.
        id: String,
    },
    /// Remove an item.
    Delete {
        /// Full id or a unique prefix.
        id: String,
    },
    /// Fill an empty list with essential foods.
    Seed,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir());
    let settings = Settings::resolve(
        cli.db.clone(),
        cli.log_dir.clone(),
        cli.log_level.clone(),
        &cwd,
    );

    let log_dir = settings.log_dir.to_string_lossy();
    if let Err(err) = grocery_core::init_logging(&settings.log_level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(&cli, &settings) {
        Ok(code) => code,
        Err(err) => {
            warn!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<ExitCode, String> {
    if let Some(parent) = settings.db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| {
            format!(
                "failed to create data directory `{}`: {err}",
                parent.display()
            )
        })?;
    }

    let mut store = Store::open(&settings.db_path)
        .map_err(|err| format!("failed to open grocery list: {err}"))?;
    let ui_conn = open_db(&settings.db_path)
        .map_err(|err| format!("failed to open presentation state: {err}"))?;
    let ui_state = SqliteUiStateRepository::new(&ui_conn);
    info!(
        "event=cli_command module=cli status=start command={}",
        command_name(&cli.command)
    );

    let mut out = std::io::stdout().lock();
    let outcome = match &cli.command {
        Commands::List => commands::list(&store, &ui_state, cli.json, &mut out)?,
        Commands::Add { title } => {
            commands::add(&mut store, &title.join(" "), cli.json, &mut out)?
        }
        Commands::Toggle { id } => commands::toggle(&mut store, id, cli.json, &mut out)?,
        Commands::Delete { id } => commands::delete(&mut store, id)?,
        Commands::Seed => commands::seed(
            &mut store,
            &ui_state,
            &mut RandomCompletion::from_entropy(),
            cli.json,
            &mut out,
        )?,
    };
    out.flush().map_err(|err| format!("failed to write output: {err}"))?;

    let code = match outcome {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::Missing(notice) => {
            eprintln!("{notice}");
            ExitCode::FAILURE
        }
    };

    store
        .close()
        .map_err(|err| format!("failed to close grocery list: {err}"))?;
    Ok(code)
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List => "list",
        Commands::Add { .. } => "add",
        Commands::Toggle { .. } => "toggle",
        Commands::Delete { .. } => "delete",
        Commands::Seed => "seed",
    }
}
