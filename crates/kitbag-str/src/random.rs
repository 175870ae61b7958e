//! Random strings from fixed character sets.
//!
//! The letter alphabets leave out `i`, `l`, `o`, `I` and `O`.

use rand::seq::SliceRandom;

const LOWERCASE: &str = "abcdefghjkmnpqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!?#$%&@-_+*=,.:;()[]{}";

/// Which letter sets to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomCase {
    #[default]
    Mixed,
    Lower,
    Upper,
}

impl RandomCase {
    fn letters(&self) -> &'static [&'static str] {
        match self {
            RandomCase::Mixed => &[LOWERCASE, UPPERCASE],
            RandomCase::Lower => &[LOWERCASE],
            RandomCase::Upper => &[UPPERCASE],
        }
    }
}

/// Letters, digits and symbols.
pub fn random(length: usize, case: RandomCase) -> String {
    let mut sets = case.letters().to_vec();
    sets.extend([DIGITS, SYMBOLS]);
    random_from(length, &sets)
}

/// Letters and digits.
pub fn random_alphanumeric(length: usize, case: RandomCase) -> String {
    let mut sets = case.letters().to_vec();
    sets.push(DIGITS);
    random_from(length, &sets)
}

/// Letters only.
pub fn random_alpha(length: usize, case: RandomCase) -> String {
    random_from(length, case.letters())
}

/// Digits only.
pub fn random_numeric(length: usize) -> String {
    random_from(length, &[DIGITS])
}

/// Builds a string of `length` characters.
///
/// For each character a set is picked uniformly, then a character from it,
/// so small sets are over-represented relative to their size. Empty sets are
/// ignored; with no usable set the result is empty.
///
/// ```
/// use kitbag_str::random_from;
///
/// let s = random_from(12, &["ab", "XY"]);
/// assert_eq!(s.chars().count(), 12);
/// assert!(s.chars().all(|c| "abXY".contains(c)));
/// ```
pub fn random_from(length: usize, charsets: &[&str]) -> String {
    let sets: Vec<Vec<char>> = charsets
        .iter()
        .map(|set| set.chars().collect::<Vec<_>>())
        .filter(|set| !set.is_empty())
        .collect();
    let mut rng = rand::thread_rng();
    (0..length)
        .filter_map(|_| sets.choose(&mut rng).and_then(|set| set.choose(&mut rng)))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(random(6, RandomCase::Mixed).len(), 6);
        assert_eq!(random(8, RandomCase::Lower).len(), 8);
        assert_eq!(random(10, RandomCase::Upper).len(), 10);
    }

    #[test]
    fn test_alphanumeric_has_no_symbols() {
        for case in [RandomCase::Mixed, RandomCase::Lower, RandomCase::Upper] {
            let s = random_alphanumeric(64, case);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()), "{}", s);
        }
    }

    #[test]
    fn test_alpha_case() {
        assert!(random_alpha(64, RandomCase::Lower).chars().all(|c| c.is_ascii_lowercase()));
        assert!(random_alpha(64, RandomCase::Upper).chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_numeric() {
        assert!(random_numeric(20).chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_no_usable_sets() {
        assert_eq!(random_from(5, &[]), "");
        assert_eq!(random_from(5, &[""]), "");
    }
}
