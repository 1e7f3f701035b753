//! Core business logic: rate table, conversions and formatting

pub mod code;
pub mod config;
pub mod convert;
pub mod error;
pub mod exchange;
pub mod format;
pub mod log;
pub mod quick;
pub mod seed;
pub mod shared;

// Re-export main types for cleaner imports
pub use code::CurrencyCode;
pub use convert::{BestExchange, Comparison};
pub use error::{ExchangeError, Result, StoreError};
pub use exchange::ExchangeState;
pub use shared::SharedExchange;
