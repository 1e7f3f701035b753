use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxrates::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxrates::AppCommand {
    fn from(cmd: Commands) -> fxrates::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                fxrates::AppCommand::Convert { amount, from, to }
            }
            Commands::Compare {
                amount,
                from,
                targets,
            } => fxrates::AppCommand::Compare {
                amount,
                from,
                targets,
            },
            Commands::Best {
                amount,
                from,
                targets,
            } => fxrates::AppCommand::Best {
                amount,
                from,
                targets,
            },
            Commands::Rates => fxrates::AppCommand::Rates,
            Commands::SetRate { code, rate } => fxrates::AppCommand::SetRate { code, rate },
            Commands::Export { path } => fxrates::AppCommand::Export { path },
            Commands::Import { path } => fxrates::AppCommand::Import { path },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
    /// Show an amount in several currencies
    Compare {
        amount: f64,
        /// Source currency, defaults to the configured base currency
        #[arg(short, long)]
        from: Option<String>,
        /// Target currencies, defaults to the configured targets
        targets: Vec<String>,
    },
    /// Find the target currency yielding the largest amount
    Best {
        amount: f64,
        /// Source currency, defaults to the configured base currency
        #[arg(short, long)]
        from: Option<String>,
        /// Target currencies, defaults to the configured targets
        targets: Vec<String>,
    },
    /// List all exchange rates
    Rates,
    /// Update the rate of a currency and save it
    SetRate { code: String, rate: f64 },
    /// Write the current rates to a JSON file
    Export { path: PathBuf },
    /// Merge rates from a JSON file and save them
    Import { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxrates::cli::setup::setup(),
        Some(cmd) => fxrates::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
