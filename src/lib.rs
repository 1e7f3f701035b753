//! Currency conversion over a table of base-relative exchange rates.
//!
//! ```
//! use fxrates::ExchangeState;
//!
//! let state = ExchangeState::new();
//! let eur = state.convert(100.0, "usd", "EUR").unwrap();
//! assert_eq!(eur, 85.0);
//! assert_eq!(state.format_currency(1234.5, "USD").unwrap(), "$1,234.50");
//! ```

pub mod cli;
pub mod core;
pub mod store;

pub use crate::core::quick::{
    convert_currency, format_currency, get_exchange_rate, supported_currencies,
};
pub use crate::core::{
    BestExchange, Comparison, CurrencyCode, ExchangeError, ExchangeState, SharedExchange,
    StoreError,
};

use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
    Compare {
        amount: f64,
        from: Option<String>,
        targets: Vec<String>,
    },
    Best {
        amount: f64,
        from: Option<String>,
        targets: Vec<String>,
    },
    Rates,
    SetRate {
        code: String,
        rate: f64,
    },
    Export {
        path: PathBuf,
    },
    Import {
        path: PathBuf,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let output = execute(command, &config)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Runs `command` against the configured rates file and returns what to print.
pub fn execute(command: AppCommand, config: &AppConfig) -> Result<String> {
    let rates_path = config.rates_path()?;
    let mut state = load_state(&rates_path)?;
    let places = config.decimal_places;

    let output = match command {
        AppCommand::Convert { amount, from, to } => {
            cli::convert::render_conversion(&state, amount, &from, &to, places)?
        }
        AppCommand::Compare {
            amount,
            from,
            targets,
        } => {
            let from = from.as_deref().unwrap_or(&config.base_currency);
            let targets = or_default_targets(&targets, config);
            cli::convert::render_comparison(&state, amount, from, targets, places)?
        }
        AppCommand::Best {
            amount,
            from,
            targets,
        } => {
            let from = from.as_deref().unwrap_or(&config.base_currency);
            let targets = or_default_targets(&targets, config);
            cli::convert::render_best(&state, amount, from, targets)?
        }
        AppCommand::Rates => cli::rates::render_rates(&state),
        AppCommand::SetRate { code, rate } => {
            state.set_rate(&code, rate)?;
            save_state(&state, &rates_path)?;
            format!("Set {} to {rate}", code.to_uppercase())
        }
        AppCommand::Export { path } => {
            state.export_rates(&path)?;
            format!("Exported rates to {}", path.display())
        }
        AppCommand::Import { path } => {
            state.import_rates(&path)?;
            save_state(&state, &rates_path)?;
            format!("Imported rates from {}", path.display())
        }
    };
    Ok(output)
}

fn or_default_targets<'a>(targets: &'a [String], config: &'a AppConfig) -> &'a [String] {
    if targets.is_empty() {
        &config.targets
    } else {
        targets
    }
}

/// Seeded state, with the saved rates file merged on top when present.
fn load_state(rates_path: &Path) -> Result<ExchangeState> {
    let mut state = ExchangeState::new();
    if rates_path.exists() {
        state.import_rates(rates_path)?;
        info!("Loaded rates from {}", rates_path.display());
    } else {
        debug!("No rates file at {}, using seed rates", rates_path.display());
    }
    Ok(state)
}

fn save_state(state: &ExchangeState, rates_path: &Path) -> Result<()> {
    if let Some(parent) = rates_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    state.export_rates(rates_path)?;
    Ok(())
}
