//! Persistence of rate tables

pub mod json;

pub use json::{export_rates, export_to_writer, import_from_reader, import_rates};
