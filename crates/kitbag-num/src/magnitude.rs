//! Short and spelled-out magnitudes for large numbers.

use serde::{Deserialize, Serialize};

use crate::format::round_to;

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Options for [`abbreviate_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abbreviation {
    /// Decimal places kept after scaling.
    pub precision: u32,
    /// `M`/`K` rather than `m`/`k`.
    pub uppercase: bool,
    /// Placed between the number and the unit.
    pub space: String,
}

impl Default for Abbreviation {
    fn default() -> Self {
        Self {
            precision: 2,
            uppercase: true,
            space: String::new(),
        }
    }
}

/// Abbreviates thousands and millions: `12341234` becomes `12.34M`.
///
/// Numbers below one thousand are printed unchanged.
///
/// ```
/// use kitbag_num::abbreviate;
///
/// assert_eq!(abbreviate(12341234.0), "12.34M");
/// assert_eq!(abbreviate(1234.0), "1.23K");
/// assert_eq!(abbreviate(123.0), "123");
/// ```
pub fn abbreviate(value: f64) -> String {
    abbreviate_with(value, &Abbreviation::default())
}

pub fn abbreviate_with(value: f64, options: &Abbreviation) -> String {
    let (scaled, unit) = if value >= MILLION {
        (round_to(value / MILLION, options.precision), "M")
    } else if value >= THOUSAND {
        (round_to(value / THOUSAND, options.precision), "K")
    } else {
        return value.to_string();
    };
    let unit = if options.uppercase {
        unit.to_string()
    } else {
        unit.to_lowercase()
    };
    format!("{}{}{}", scaled, options.space, unit)
}

/// Spells out thousands and millions, rounded to a whole number:
/// `12345` becomes `12 Thousand`.
pub fn readable(value: f64) -> String {
    readable_with(value, true)
}

/// Like [`readable`]; `capitalized` selects `Million` over `million`.
pub fn readable_with(value: f64, capitalized: bool) -> String {
    let (scaled, unit) = if value >= MILLION {
        ((value / MILLION).round(), "Million")
    } else if value >= THOUSAND {
        ((value / THOUSAND).round(), "Thousand")
    } else {
        return value.to_string();
    };
    let unit = if capitalized {
        unit.to_string()
    } else {
        unit.to_lowercase()
    };
    format!("{} {}", scaled, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_options() {
        let options = Abbreviation {
            precision: 1,
            uppercase: false,
            space: " ".to_string(),
        };
        assert_eq!(abbreviate_with(2_560_000.0, &options), "2.6 m");
        assert_eq!(abbreviate_with(999.0, &options), "999");
    }

    #[test]
    fn test_abbreviate_boundaries() {
        assert_eq!(abbreviate(1000.0), "1K");
        assert_eq!(abbreviate(1_000_000.0), "1M");
        assert_eq!(abbreviate(999_999.0), "1000K");
    }

    #[test]
    fn test_readable() {
        assert_eq!(readable(12341234.0), "12 Million");
        assert_eq!(readable(12345.0), "12 Thousand");
        assert_eq!(readable(123.0), "123");
        assert_eq!(readable_with(2_500_000.0, false), "3 million");
    }
}
