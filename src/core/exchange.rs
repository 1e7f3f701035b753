//! Rate table and the state it lives in

use crate::core::code::CurrencyCode;
use crate::core::error::{ExchangeError, Result};
use crate::core::seed::{BASE_CURRENCY, SEED};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::debug;

/// Base currency, per-currency rates and the reference symbol and name tables.
///
/// Rates are units of a currency per one unit of the base currency. Symbols
/// and names are seeded once and never touched by updates or imports.
#[derive(Debug, Clone)]
pub struct ExchangeState {
    base_currency: CurrencyCode,
    rates: BTreeMap<CurrencyCode, f64>,
    symbols: BTreeMap<CurrencyCode, String>,
    names: BTreeMap<CurrencyCode, String>,
    last_updated: DateTime<Utc>,
}

impl ExchangeState {
    pub fn new() -> Self {
        let mut rates = BTreeMap::new();
        let mut symbols = BTreeMap::new();
        let mut names = BTreeMap::new();
        for currency in &SEED {
            let code = CurrencyCode::new(currency.code);
            rates.insert(code.clone(), currency.rate);
            symbols.insert(code.clone(), currency.symbol.to_string());
            names.insert(code, currency.name.to_string());
        }

        Self {
            base_currency: CurrencyCode::new(BASE_CURRENCY),
            rates,
            symbols,
            names,
            last_updated: Utc::now(),
        }
    }

    pub fn base_currency(&self) -> &CurrencyCode {
        &self.base_currency
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn supported_currencies(&self) -> Vec<CurrencyCode> {
        self.rates.keys().cloned().collect()
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.rates.contains_key(CurrencyCode::new(code).as_str())
    }

    pub fn rate_of(&self, code: &str) -> Result<f64> {
        let code = CurrencyCode::new(code);
        self.rates
            .get(&code)
            .copied()
            .ok_or(ExchangeError::UnsupportedCurrency(code))
    }

    pub fn currency_name(&self, code: &str) -> Result<&str> {
        let code = CurrencyCode::new(code);
        self.names
            .get(&code)
            .map(String::as_str)
            .ok_or(ExchangeError::UnsupportedCurrency(code))
    }

    pub fn currency_symbol(&self, code: &str) -> Result<&str> {
        let code = CurrencyCode::new(code);
        self.symbols
            .get(&code)
            .map(String::as_str)
            .ok_or(ExchangeError::UnsupportedCurrency(code))
    }

    /// Overwrites the rate of a currency already in the table.
    ///
    /// New currencies cannot be added this way; only an import can extend
    /// the table.
    pub fn set_rate(&mut self, code: &str, rate: f64) -> Result<()> {
        let code = CurrencyCode::new(code);
        let Some(slot) = self.rates.get_mut(&code) else {
            return Err(ExchangeError::UnsupportedCurrency(code));
        };
        if !is_valid_rate(rate) {
            return Err(ExchangeError::InvalidRate { code, rate });
        }

        *slot = rate;
        self.last_updated = Utc::now();
        debug!(%code, rate, "Updated exchange rate");
        Ok(())
    }

    /// Applies [`Self::set_rate`] to each entry in order.
    ///
    /// Stops at the first failure. Entries applied before it are kept.
    pub fn set_rates<I, K>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        for (code, rate) in entries {
            self.set_rate(code.as_ref(), rate)?;
        }
        Ok(())
    }

    pub fn all_rates(&self) -> BTreeMap<CurrencyCode, f64> {
        self.rates.clone()
    }

    pub fn symbols(&self) -> BTreeMap<CurrencyCode, String> {
        self.symbols.clone()
    }

    pub fn names(&self) -> BTreeMap<CurrencyCode, String> {
        self.names.clone()
    }

    pub(crate) fn rates_ref(&self) -> &BTreeMap<CurrencyCode, f64> {
        &self.rates
    }

    pub(crate) fn symbols_ref(&self) -> &BTreeMap<CurrencyCode, String> {
        &self.symbols
    }

    pub(crate) fn names_ref(&self) -> &BTreeMap<CurrencyCode, String> {
        &self.names
    }

    /// Upserts rates, possibly adding codes with no symbol or name.
    pub(crate) fn merge_rates(&mut self, rates: BTreeMap<CurrencyCode, f64>) {
        self.rates.extend(rates);
    }

    pub(crate) fn set_base_currency(&mut self, code: CurrencyCode) {
        self.base_currency = code;
    }

    pub(crate) fn set_last_updated(&mut self, at: DateTime<Utc>) {
        self.last_updated = at;
    }
}

impl Default for ExchangeState {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}
