//! Reference rates loaded into every new exchange state

pub const BASE_CURRENCY: &str = "USD";

pub struct SeedCurrency {
    pub code: &'static str,
    pub rate: f64,
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn seed(
    code: &'static str,
    rate: f64,
    symbol: &'static str,
    name: &'static str,
) -> SeedCurrency {
    SeedCurrency {
        code,
        rate,
        symbol,
        name,
    }
}

/// Units of each currency per one US dollar.
pub const SEED: [SeedCurrency; 20] = [
    seed("USD", 1.0, "$", "US Dollar"),
    seed("EUR", 0.85, "€", "Euro"),
    seed("GBP", 0.73, "£", "British Pound Sterling"),
    seed("JPY", 110.0, "¥", "Japanese Yen"),
    seed("CAD", 1.25, "C$", "Canadian Dollar"),
    seed("AUD", 1.35, "A$", "Australian Dollar"),
    seed("CHF", 0.92, "CHF", "Swiss Franc"),
    seed("CNY", 6.45, "¥", "Chinese Yuan"),
    seed("INR", 74.5, "₹", "Indian Rupee"),
    seed("BRL", 5.2, "R$", "Brazilian Real"),
    seed("MXN", 20.1, "$", "Mexican Peso"),
    seed("KRW", 1180.0, "₩", "South Korean Won"),
    seed("SGD", 1.35, "S$", "Singapore Dollar"),
    seed("HKD", 7.8, "HK$", "Hong Kong Dollar"),
    seed("NOK", 8.6, "kr", "Norwegian Krone"),
    seed("SEK", 8.9, "kr", "Swedish Krona"),
    seed("DKK", 6.3, "kr", "Danish Krone"),
    seed("PLN", 3.9, "zł", "Polish Zloty"),
    seed("CZK", 21.5, "Kč", "Czech Koruna"),
    seed("HUF", 295.0, "Ft", "Hungarian Forint"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_is_consistent() {
        let codes: HashSet<_> = SEED.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), SEED.len());

        let base = SEED.iter().find(|c| c.code == BASE_CURRENCY).unwrap();
        assert_eq!(base.rate, 1.0);
        assert!(SEED.iter().all(|c| c.rate.is_finite() && c.rate > 0.0));
        assert!(SEED.iter().all(|c| c.code == c.code.to_uppercase()));
    }
}
