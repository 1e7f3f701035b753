//! Conversions routed through the base currency

use crate::core::code::CurrencyCode;
use crate::core::error::{ExchangeError, Result};
use crate::core::exchange::ExchangeState;
use std::collections::BTreeMap;

/// One target of a multi-currency comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub amount: f64,
    pub formatted: String,
    pub rate: f64,
}

/// The target yielding the largest converted amount.
#[derive(Debug, Clone, PartialEq)]
pub struct BestExchange {
    pub currency: CurrencyCode,
    pub amount: f64,
    pub formatted: String,
    pub rate: f64,
}

impl ExchangeState {
    /// Units of `to` received for one unit of `from`.
    pub fn exchange_rate(&self, from: &str, to: &str) -> Result<f64> {
        let from = CurrencyCode::new(from);
        let to = CurrencyCode::new(to);
        let from_rate = self.rate_of(from.as_str())?;
        let to_rate = self.rate_of(to.as_str())?;

        if from == to {
            return Ok(1.0);
        }
        Ok(to_rate / from_rate)
    }

    /// Converts `amount`, rounding the result to two decimal places.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ExchangeError::InvalidAmount(amount));
        }
        let rate = self.exchange_rate(from, to)?;
        Ok(round_cents(amount * rate))
    }

    /// Converts to each target in order, failing on the first bad one.
    pub fn convert_many<S: AsRef<str>>(
        &self,
        amount: f64,
        from: &str,
        targets: &[S],
    ) -> Result<BTreeMap<CurrencyCode, f64>> {
        let mut results = BTreeMap::new();
        for target in targets {
            let converted = self.convert(amount, from, target.as_ref())?;
            results.insert(CurrencyCode::new(target.as_ref()), converted);
        }
        Ok(results)
    }

    pub fn compare<S: AsRef<str>>(
        &self,
        amount: f64,
        base: &str,
        targets: &[S],
    ) -> Result<BTreeMap<CurrencyCode, Comparison>> {
        self.convert_many(amount, base, targets)?
            .into_iter()
            .map(|(code, converted)| {
                let comparison = Comparison {
                    amount: converted,
                    formatted: self.format_currency(converted, code.as_str())?,
                    rate: self.exchange_rate(base, code.as_str())?,
                };
                Ok::<_, ExchangeError>((code, comparison))
            })
            .collect()
    }

    /// Picks the target with the strictly greatest converted amount.
    ///
    /// Ties go to the target listed first.
    pub fn find_best<S: AsRef<str>>(
        &self,
        amount: f64,
        from: &str,
        targets: &[S],
    ) -> Result<BestExchange> {
        if targets.is_empty() {
            return Err(ExchangeError::EmptyTargetList);
        }
        let conversions = self.convert_many(amount, from, targets)?;

        let mut best: Option<(CurrencyCode, f64)> = None;
        for target in targets {
            let code = CurrencyCode::new(target.as_ref());
            let converted = conversions[&code];
            if best.as_ref().is_none_or(|(_, top)| converted > *top) {
                best = Some((code, converted));
            }
        }
        let Some((currency, amount)) = best else {
            return Err(ExchangeError::EmptyTargetList);
        };

        Ok(BestExchange {
            rate: self.exchange_rate(from, currency.as_str())?,
            formatted: self.format_currency(amount, currency.as_str())?,
            currency,
            amount,
        })
    }
}

/// Rounds half away from zero at the second decimal.
///
/// Operates on the binary value, so `2.005` rounds to `2.0`. Values of
/// 2^52 and above carry no fraction and are returned as is.
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= 2f64.powi(52) {
        return value;
    }
    (value * 100.0).round() / 100.0
}
