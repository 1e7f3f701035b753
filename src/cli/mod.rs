//! Terminal rendering for the `fxrates` commands

pub mod convert;
pub mod rates;
pub mod setup;
pub mod ui;
