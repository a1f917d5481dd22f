use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{show_audit, show_config, Session};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Single-user command-line budget tracker",
    long_about = "Budget Tracker keeps a running balance of your income and expenses. \
                  Register or log in, then add transactions from an interactive menu."
)]
struct Cli {
    /// Directory holding settings, users, transactions and the audit log
    #[arg(long, global = true, env = "BUDGET_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive register/login session (default)
    #[command(alias = "run")]
    Session,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    budget_tracker::logging::init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);
    storage.load_all()?;

    tracing::debug!(base_dir = %paths.base_dir().display(), "storage loaded");

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let hide_password = settings.hide_password_input && interactive;
            let color = io::stdout().is_terminal();

            Session::new(&storage, &settings, stdin.lock(), io::stdout().lock())
                .hide_password(hide_password)
                .color(color)
                .run()?;
        }
        Commands::Config => show_config(&paths, &settings)?,
        Commands::Audit { limit } => show_audit(&storage, limit)?,
    }

    Ok(())
}
