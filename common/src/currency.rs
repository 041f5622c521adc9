use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies. Prices are stored as whole units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Inr]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
        }
    }

    /// Parse an ISO code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Format a whole-unit amount with its symbol and thousands separators,
/// e.g. `$12,450`.
pub fn format_amount(amount: u64, currency: &Currency) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{grouped}", currency.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(0, &Currency::Usd), "$0");
        assert_eq!(format_amount(999, &Currency::Usd), "$999");
        assert_eq!(format_amount(1000, &Currency::Eur), "€1,000");
        assert_eq!(format_amount(1_234_567, &Currency::Inr), "₹1,234,567");
    }

    #[test]
    fn parses_codes() {
        assert_eq!(Currency::from_code("gbp"), Some(Currency::Gbp));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
