//! A catalogue of numbered error messages and the codes currently raised.

use indexmap::IndexMap;
use thiserror::Error;

/// Raised when a code is not in the catalogue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorCodeError {
    #[error("error code {0} is not allowed")]
    UnknownCode(u32),
}

pub type Result<T> = std::result::Result<T, ErrorCodeError>;

/// Known error messages keyed by code, plus the list of active codes.
///
/// Only catalogued codes can be raised. Active codes keep the order in which
/// they were added and may repeat.
///
/// # Example
///
/// ```
/// use kitbag::ErrorCodes;
///
/// let mut errors = ErrorCodes::new([(1, "Missing name"), (2, "Bad email")]);
/// errors.set_code(2).unwrap();
/// assert!(errors.has_error());
/// assert_eq!(errors.message(2).unwrap(), "Bad email");
/// assert!(errors.add_code(9).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCodes {
    messages: IndexMap<u32, String>,
    codes: Vec<u32>,
}

impl ErrorCodes {
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(|(code, msg)| (code, msg.into())).collect(),
            codes: Vec::new(),
        }
    }

    /// Adds or replaces a catalogue entry.
    pub fn with_message(mut self, code: u32, message: impl Into<String>) -> Self {
        self.messages.insert(code, message.into());
        self
    }

    /// Replaces the active codes with `code`.
    pub fn set_code(&mut self, code: u32) -> Result<&mut Self> {
        self.check(code)?;
        self.codes = vec![code];
        Ok(self)
    }

    /// Replaces the active codes. Stops at the first unknown code, leaving
    /// the codes before it active.
    pub fn set_codes(&mut self, codes: impl IntoIterator<Item = u32>) -> Result<&mut Self> {
        self.codes.clear();
        self.add_codes(codes)
    }

    pub fn add_code(&mut self, code: u32) -> Result<&mut Self> {
        self.check(code)?;
        self.codes.push(code);
        Ok(self)
    }

    pub fn add_codes(&mut self, codes: impl IntoIterator<Item = u32>) -> Result<&mut Self> {
        for code in codes {
            self.add_code(code)?;
        }
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.codes.clear();
        self
    }

    /// Active codes in the order raised.
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    pub fn has_codes(&self) -> bool {
        !self.codes.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.has_codes()
    }

    pub fn is_error(&self) -> bool {
        self.has_codes()
    }

    /// Messages for the active codes, in catalogue order.
    pub fn messages(&self) -> IndexMap<u32, &str> {
        self.messages
            .iter()
            .filter(|(code, _)| self.codes.contains(*code))
            .map(|(code, msg)| (*code, msg.as_str()))
            .collect()
    }

    pub fn all_messages(&self) -> &IndexMap<u32, String> {
        &self.messages
    }

    pub fn all_codes(&self) -> Vec<u32> {
        self.messages.keys().copied().collect()
    }

    /// The message for a catalogued code.
    pub fn message(&self, code: u32) -> Result<&str> {
        self.messages
            .get(&code)
            .map(String::as_str)
            .ok_or(ErrorCodeError::UnknownCode(code))
    }

    fn check(&self, code: u32) -> Result<()> {
        if self.messages.contains_key(&code) {
            Ok(())
        } else {
            Err(ErrorCodeError::UnknownCode(code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> ErrorCodes {
        ErrorCodes::new((1..=5).map(|code| (code, format!("Error #{}", code))))
    }

    #[test]
    fn test_set_code() {
        let mut errors = catalogue();
        errors.set_code(1).unwrap();
        assert!(errors.has_error());
        assert!(errors.is_error());
    }

    #[test]
    fn test_set_codes_replaces() {
        let mut errors = catalogue();
        errors.add_code(5).unwrap();
        errors.set_codes([1, 2]).unwrap();
        assert_eq!(errors.codes(), &[1, 2]);
    }

    #[test]
    fn test_unknown_codes_rejected() {
        let mut errors = catalogue();
        assert_eq!(errors.set_code(0).unwrap_err(), ErrorCodeError::UnknownCode(0));
        assert_eq!(errors.add_code(0).unwrap_err(), ErrorCodeError::UnknownCode(0));
        assert_eq!(errors.message(0).unwrap_err(), ErrorCodeError::UnknownCode(0));
        assert!(!errors.has_error());
    }

    #[test]
    fn test_chained_codes_and_messages() {
        let mut errors = catalogue();
        errors.set_code(1).unwrap().add_code(2).unwrap().add_code(4).unwrap();
        assert_eq!(errors.codes(), &[1, 2, 4]);
        let messages: Vec<(u32, &str)> = errors.messages().into_iter().collect();
        assert_eq!(messages, vec![(1, "Error #1"), (2, "Error #2"), (4, "Error #4")]);
    }

    #[test]
    fn test_catalogue() {
        let errors = catalogue();
        assert_eq!(errors.all_codes(), vec![1, 2, 3, 4, 5]);
        assert_eq!(errors.all_messages().len(), 5);
        assert_eq!(errors.message(1).unwrap(), "Error #1");
    }

    #[test]
    fn test_clear() {
        let mut errors = catalogue().with_message(6, "Error #6");
        errors.add_codes([6, 3]).unwrap();
        errors.clear();
        assert!(!errors.has_codes());
    }
}
