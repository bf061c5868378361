//! Opaque store-assigned record identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of the canonical identifier encoding.
const ENCODED_LEN: usize = 24;

/// Opaque identifier naming a stored document.
///
/// The store assigns these; this layer only round-trips them. The canonical
/// encoding is 24 hexadecimal digits, and parsing anything else fails so that
/// a malformed path segment surfaces as a client error rather than a lookup
/// miss.
///
/// # Examples
/// ```
/// use kerbside::domain::RecordId;
///
/// let id: RecordId = "64b9d3e2a1f04c7b8d2e5f01".parse().expect("valid id");
/// assert_eq!(id.as_str(), "64b9d3e2a1f04c7b8d2e5f01");
/// assert!("not-an-id".parse::<RecordId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

/// Parse failures for [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordIdError {
    /// Input is not a 24-digit hexadecimal string.
    #[error("record id must be a 24-digit hexadecimal string")]
    Malformed,
}

impl RecordId {
    /// Validate and construct a [`RecordId`].
    pub fn new(id: impl Into<String>) -> Result<Self, RecordIdError> {
        let raw = id.into();
        if raw.len() != ENCODED_LEN || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RecordIdError::Malformed);
        }
        Ok(Self(raw))
    }

    /// Borrow the canonical encoding.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = RecordIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn accepts_canonical_hex() {
        let id = RecordId::new("507f1f77bcf86cd799439011").expect("valid id");
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn accepts_upper_case_hex() {
        assert!(RecordId::new("507F1F77BCF86CD799439011").is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("507f1f77bcf86cd79943901")] // one digit short
    #[case("507f1f77bcf86cd7994390111")] // one digit long
    #[case("507f1f77bcf86cd79943901z")] // non-hex
    #[case(" 507f1f77bcf86cd79943901")] // leading whitespace
    fn rejects_malformed_input(#[case] raw: &str) {
        assert_eq!(raw.parse::<RecordId>(), Err(RecordIdError::Malformed));
    }
}
