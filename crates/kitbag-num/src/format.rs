//! Fixed-precision number formatting.

use serde::{Deserialize, Serialize};

/// Rounds `value` to `precision` decimal places, halves away from zero.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Formatting rules for fixed-precision numbers.
///
/// Deserializes from partial configuration; missing fields take the
/// defaults (two decimals, `.` decimal point, no thousands separator).
///
/// ```
/// use kitbag_num::NumberFormat;
///
/// let european = NumberFormat::new()
///     .decimal_point(",")
///     .thousands_separator(".");
/// assert_eq!(european.format(1234567.891), "1.234.567,89");
/// assert_eq!(NumberFormat::new().precision(0).format(2.5), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub precision: u32,
    pub decimal_point: String,
    pub thousands_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            decimal_point: ".".to_string(),
            thousands_separator: String::new(),
        }
    }
}

impl NumberFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn decimal_point(mut self, decimal_point: impl Into<String>) -> Self {
        self.decimal_point = decimal_point.into();
        self
    }

    pub fn thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = separator.into();
        self
    }

    /// Formats `value` with these rules.
    pub fn format(&self, value: f64) -> String {
        let rounded = round_to(value, self.precision);
        let digits = format!("{:.*}", self.precision as usize, rounded.abs());
        let (integer, fraction) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + 4);
        if rounded < 0.0 {
            out.push('-');
        }
        out.push_str(&group_thousands(integer, &self.thousands_separator));
        if let Some(fraction) = fraction {
            out.push_str(&self.decimal_point);
            out.push_str(fraction);
        }
        out
    }
}

fn group_thousands(integer: &str, separator: &str) -> String {
    if separator.is_empty() || integer.len() <= 3 {
        return integer.to_string();
    }
    let mut grouped = String::with_capacity(integer.len() + separator.len() * (integer.len() / 3));
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}
