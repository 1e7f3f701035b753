//! JSON export and import of an exchange state

use crate::core::code::CurrencyCode;
use crate::core::error::{ExchangeError, Result, StoreError};
use crate::core::exchange::{ExchangeState, is_valid_rate};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

#[derive(Serialize)]
struct ExportDocument<'a> {
    base_currency: &'a CurrencyCode,
    exchange_rates: &'a BTreeMap<CurrencyCode, f64>,
    last_updated: String,
    currency_symbols: &'a BTreeMap<CurrencyCode, String>,
    currency_names: &'a BTreeMap<CurrencyCode, String>,
}

// Symbols and names in the file are not read back.
#[derive(Deserialize)]
struct ImportDocument {
    base_currency: Option<CurrencyCode>,
    exchange_rates: Option<BTreeMap<CurrencyCode, f64>>,
    last_updated: Option<String>,
}

/// Validated contents of an import, ready to apply.
struct ImportedRates {
    base_currency: Option<CurrencyCode>,
    rates: BTreeMap<CurrencyCode, f64>,
    last_updated: DateTime<Utc>,
}

pub fn export_to_writer<W: Write>(
    state: &ExchangeState,
    writer: W,
) -> std::result::Result<(), StoreError> {
    let document = ExportDocument {
        base_currency: state.base_currency(),
        exchange_rates: state.rates_ref(),
        last_updated: format_timestamp(state.last_updated()),
        currency_symbols: state.symbols_ref(),
        currency_names: state.names_ref(),
    };
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush()?;
    Ok(())
}

/// Merges a JSON document into `state`.
///
/// The whole document is parsed and checked first; on error the state is
/// left as it was.
pub fn import_from_reader<R: Read>(
    state: &mut ExchangeState,
    reader: R,
) -> std::result::Result<(), StoreError> {
    let document: ImportDocument = serde_json::from_reader(BufReader::new(reader))?;
    let imported = validate(document)?;

    debug!(count = imported.rates.len(), "Merging imported rates");
    state.merge_rates(imported.rates);
    if let Some(base) = imported.base_currency {
        if state.rates_ref().get(&base) != Some(&1.0) {
            warn!(%base, "Imported base currency does not have a rate of 1.0");
        }
        state.set_base_currency(base);
    }
    state.set_last_updated(imported.last_updated);
    Ok(())
}

/// Writes the state as pretty-printed JSON, replacing `path` atomically.
pub fn export_rates(state: &ExchangeState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_atomically(state, path).map_err(|source| ExchangeError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Exported rates to {}", path.display());
    Ok(())
}

pub fn import_rates(state: &mut ExchangeState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    File::open(path)
        .map_err(StoreError::from)
        .and_then(|file| import_from_reader(state, file))
        .map_err(|source| ExchangeError::Import {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Imported rates from {}", path.display());
    Ok(())
}

impl ExchangeState {
    pub fn export_rates(&self, path: impl AsRef<Path>) -> Result<()> {
        export_rates(self, path)
    }

    pub fn import_rates(&mut self, path: impl AsRef<Path>) -> Result<()> {
        import_rates(self, path)
    }
}

fn write_atomically(state: &ExchangeState, path: &Path) -> std::result::Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    export_to_writer(state, file.as_file_mut())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}

fn validate(document: ImportDocument) -> std::result::Result<ImportedRates, StoreError> {
    let rates = document.exchange_rates.unwrap_or_default();
    if let Some((code, rate)) = rates.iter().find(|(_, rate)| !is_valid_rate(**rate)) {
        return Err(StoreError::InvalidRate {
            code: code.clone(),
            rate: *rate,
        });
    }

    let last_updated = match document.last_updated {
        Some(value) => parse_timestamp(&value)?,
        None => Utc::now(),
    };

    Ok(ImportedRates {
        base_currency: document.base_currency,
        rates,
        last_updated,
    })
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Accepts RFC 3339 with an offset, or a naive ISO-8601 date-time (`T` or
/// space separated) or bare date, read as UTC.
fn parse_timestamp(value: &str) -> std::result::Result<DateTime<Utc>, StoreError> {
    let mut parsed = DateTime::parse_from_rfc3339(value).map(|at| at.with_timezone(&Utc));
    for format in NAIVE_FORMATS {
        parsed = parsed
            .or_else(|_| NaiveDateTime::parse_from_str(value, format).map(|at| at.and_utc()));
    }
    parsed
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        })
        .map_err(|source| StoreError::Timestamp {
            value: value.to_string(),
            source,
        })
}
