//! Number formatting helpers.
//!
//! ```rust
//! use kitbag_num::{abbreviate, currency, percentage, readable};
//!
//! assert_eq!(currency(1234.5643), "$1,234.56");
//! assert_eq!(percentage(12.12), "12.12%");
//! assert_eq!(abbreviate(12341234.0), "12.34M");
//! assert_eq!(readable(12345.0), "12 Thousand");
//! ```
//!
//! All rounding is half away from zero. Custom layouts go through
//! [`NumberFormat`], which can also be loaded from configuration via serde.

mod format;
mod magnitude;

pub use format::{round_to, NumberFormat};
pub use magnitude::{abbreviate, abbreviate_with, readable, readable_with, Abbreviation};

/// Two decimals, no thousands separator.
pub fn float(value: f64) -> String {
    NumberFormat::default().format(value)
}

/// Dollar amount with `,` thousands separators and two decimals.
pub fn currency(value: f64) -> String {
    currency_with(value, "$", &NumberFormat::new().thousands_separator(","))
}

/// Amount prefixed with `symbol`, formatted with `format`.
pub fn currency_with(value: f64, symbol: &str, format: &NumberFormat) -> String {
    format!("{}{}", symbol, format.format(value))
}

/// Formats a value that is already a percentage: `12.12` becomes `12.12%`.
pub fn percentage(value: f64) -> String {
    percentage_with(value, 2)
}

pub fn percentage_with(value: f64, precision: u32) -> String {
    format!("{}%", NumberFormat::new().precision(precision).format(value))
}

/// Formats a ratio as a percentage: `0.1212` becomes `12.12%`.
pub fn convert_percentage(value: f64) -> String {
    percentage_with(value * 100.0, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float() {
        assert_eq!(float(123.45), "123.45");
        assert_eq!(float(1234567.0), "1234567.00");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(1234.5643), "$1,234.56");
        assert_eq!(currency_with(5.0, "€", &NumberFormat::new().decimal_point(",")), "€5,00");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(percentage(12.12), "12.12%");
        assert_eq!(convert_percentage(0.1212), "12.12%");
        assert_eq!(percentage_with(33.333, 1), "33.3%");
    }
}
