//! Driver records and the status value object.

use std::fmt;

use thiserror::Error;

/// Validation errors for driver values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverValidationError {
    /// Status is empty once trimmed of whitespace.
    #[error("status must not be empty")]
    EmptyStatus,
}

/// Driver availability status set via the status update endpoint.
///
/// Free-form on the wire; the only invariant is that it is non-empty.
///
/// # Examples
/// ```
/// use kerbside::domain::DriverStatus;
///
/// let status = DriverStatus::new("active").expect("valid status");
/// assert_eq!(status.as_str(), "active");
/// assert!(DriverStatus::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverStatus(String);

impl DriverStatus {
    /// Validate and construct a [`DriverStatus`].
    pub fn new(status: impl Into<String>) -> Result<Self, DriverValidationError> {
        let raw = status.into();
        if raw.trim().is_empty() {
            return Err(DriverValidationError::EmptyStatus);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw status string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for DriverStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A driver record as created by the seeding utility.
///
/// Drivers are never created through the HTTP surface; the service only
/// mutates their status and reads their earnings.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSeed {
    pub name: String,
    pub vehicle_type: String,
    pub is_available: bool,
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn accepts_non_empty_status() {
        let status = DriverStatus::new("on break").expect("valid status");
        assert_eq!(status.to_string(), "on break");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn rejects_blank_status(#[case] raw: &str) {
        assert_eq!(
            DriverStatus::new(raw),
            Err(DriverValidationError::EmptyStatus)
        );
    }
}
