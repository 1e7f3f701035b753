//! Error types for rate lookups, conversions and persistence

use crate::core::code::CurrencyCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(CurrencyCode),

    #[error("Amount must be a non-negative number, got {0}")]
    InvalidAmount(f64),

    #[error("Exchange rate must be a positive number, got {rate} for {code}")]
    InvalidRate { code: CurrencyCode, rate: f64 },

    #[error("At least one target currency is required")]
    EmptyTargetList,

    #[error("Failed to import rates from {}: {source}", .path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: StoreError,
    },

    #[error("Failed to export rates to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

/// Underlying cause of a failed import or export.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid rate {rate} for {code}")]
    InvalidRate { code: CurrencyCode, rate: f64 },
}

pub type Result<T> = std::result::Result<T, ExchangeError>;
