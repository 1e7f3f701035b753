//! Shorthand functions over an explicitly passed state

use crate::core::code::CurrencyCode;
use crate::core::error::Result;
use crate::core::exchange::ExchangeState;

pub fn convert_currency(state: &ExchangeState, amount: f64, from: &str, to: &str) -> Result<f64> {
    state.convert(amount, from, to)
}

pub fn get_exchange_rate(state: &ExchangeState, from: &str, to: &str) -> Result<f64> {
    state.exchange_rate(from, to)
}

pub fn format_currency(state: &ExchangeState, amount: f64, code: &str) -> Result<String> {
    state.format_currency(amount, code)
}

pub fn supported_currencies(state: &ExchangeState) -> Vec<CurrencyCode> {
    state.supported_currencies()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthands_use_given_state() {
        let mut state = ExchangeState::new();
        state.set_rate("EUR", 0.5).unwrap();

        assert_eq!(convert_currency(&state, 50.0, "usd", "eur").unwrap(), 25.0);
        assert_eq!(get_exchange_rate(&state, "EUR", "USD").unwrap(), 2.0);
        assert_eq!(format_currency(&state, 1234.56, "GBP").unwrap(), "£1,234.56");
        assert_eq!(supported_currencies(&state).len(), 20);

        let fresh = ExchangeState::new();
        assert_eq!(convert_currency(&fresh, 50.0, "USD", "EUR").unwrap(), 42.5);
    }
}
