//! Spreadsheet identity

use std::fmt;

/// Opaque numeric identity of one spreadsheet instance
///
/// Stable for the lifetime of the spreadsheet; assigned by the collaborator
/// that owns spreadsheet metadata. Renders as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpreadsheetId(u64);

impl SpreadsheetId {
    /// Wrap a raw identity value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw identity value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SpreadsheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SpreadsheetId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_bare_number() {
        assert_eq!(SpreadsheetId::new(123).to_string(), "123");
        assert_eq!(SpreadsheetId::new(0).to_string(), "0");
    }

    #[test]
    fn test_value_roundtrip() {
        let id = SpreadsheetId::from(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id, SpreadsheetId::new(42));
        assert_ne!(id, SpreadsheetId::new(43));
        assert!(SpreadsheetId::new(1) < SpreadsheetId::new(2));
    }
}
