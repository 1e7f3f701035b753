//! Fixed-convention amount formatting

use crate::core::code::CurrencyCode;
use crate::core::error::{ExchangeError, Result};
use crate::core::exchange::ExchangeState;

impl ExchangeState {
    /// Formats `amount` with comma thousands and a dot decimal point.
    ///
    /// The symbol is prefixed without a space when `include_symbol` is set,
    /// otherwise the code is appended after a single space.
    pub fn format_amount(
        &self,
        amount: f64,
        code: &str,
        include_symbol: bool,
        decimal_places: usize,
    ) -> Result<String> {
        let code = CurrencyCode::new(code);
        if !self.rates_ref().contains_key(&code) {
            return Err(ExchangeError::UnsupportedCurrency(code));
        }

        let number = group_thousands(amount, decimal_places);
        if include_symbol {
            let symbol = self.currency_symbol(code.as_str())?;
            Ok(format!("{symbol}{number}"))
        } else {
            Ok(format!("{number} {code}"))
        }
    }

    pub fn format_currency(&self, amount: f64, code: &str) -> Result<String> {
        self.format_amount(amount, code, true, 2)
    }
}

/// Renders `amount` with `decimal_places` digits and comma-grouped integer part.
///
/// Digits come from std float formatting, which rounds exact binary ties to
/// even: `0.125` renders as `0.12` here while [`round_cents`] gives `0.13`.
/// Amounts coming out of `convert` are already rounded and print unchanged.
///
/// [`round_cents`]: crate::core::convert::round_cents
pub fn group_thousands(amount: f64, decimal_places: usize) -> String {
    let rendered = format!("{amount:.decimal_places$}");
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    // inf and NaN have no digits to group
    if !integer.bytes().all(|b| b.is_ascii_digit()) {
        return rendered;
    }

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0, 2), "0.00");
        assert_eq!(group_thousands(999.999, 2), "1,000.00");
        assert_eq!(group_thousands(1234.5, 2), "1,234.50");
        assert_eq!(group_thousands(1234567.891, 3), "1,234,567.891");
        assert_eq!(group_thousands(123456.0, 0), "123,456");
        assert_eq!(group_thousands(-1234.5, 2), "-1,234.50");
        assert_eq!(group_thousands(100.0, 1), "100.0");
    }

    #[test]
    fn test_group_thousands_rounds_ties_to_even() {
        assert_eq!(group_thousands(0.125, 2), "0.12");
        assert_eq!(group_thousands(0.375, 2), "0.38");
        assert_eq!(group_thousands(2.5, 0), "2");

        let state = ExchangeState::new();
        let converted = state.convert(0.125, "USD", "USD").unwrap();
        assert_eq!(state.format_currency(converted, "USD").unwrap(), "$0.13");
    }

    #[test]
    fn test_format_currency_with_symbol() {
        let state = ExchangeState::new();
        assert_eq!(state.format_currency(1234.5, "USD").unwrap(), "$1,234.50");
        assert_eq!(state.format_currency(85.0, "eur").unwrap(), "€85.00");
        assert_eq!(state.format_currency(11000.0, "JPY").unwrap(), "¥11,000.00");
        assert_eq!(state.format_currency(1.0, "CHF").unwrap(), "CHF1.00");
    }

    #[test]
    fn test_format_amount_without_symbol() {
        let state = ExchangeState::new();
        assert_eq!(
            state.format_amount(1234.5, "usd", false, 2).unwrap(),
            "1,234.50 USD"
        );
        assert_eq!(
            state.format_amount(1234.5678, "GBP", false, 3).unwrap(),
            "1,234.568 GBP"
        );
        assert_eq!(state.format_amount(7.0, "KRW", true, 0).unwrap(), "₩7");
    }

    #[test]
    fn test_format_negative_keeps_sign_after_symbol() {
        let state = ExchangeState::new();
        assert_eq!(state.format_currency(-1234.5, "USD").unwrap(), "$-1,234.50");
    }

    #[test]
    fn test_format_unknown_currency() {
        let state = ExchangeState::new();
        assert!(matches!(
            state.format_currency(1.0, "XYZ"),
            Err(ExchangeError::UnsupportedCurrency(_))
        ));
    }

    #[test]
    fn test_format_currency_without_symbol_entry() {
        let mut state = ExchangeState::new();
        state.merge_rates(BTreeMap::from([(CurrencyCode::new("XAU"), 0.0005)]));

        assert_eq!(state.format_amount(2.5, "XAU", false, 2).unwrap(), "2.50 XAU");
        assert!(matches!(
            state.format_currency(2.5, "XAU"),
            Err(ExchangeError::UnsupportedCurrency(_))
        ));
    }
}
