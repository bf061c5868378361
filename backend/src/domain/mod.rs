//! Transport-agnostic domain types and ports.
//!
//! Nothing here knows about HTTP or the document store driver. Inbound
//! adapters map these types onto the wire; outbound adapters map them onto
//! store queries.

pub mod analytics;
pub mod driver;
pub mod error;
pub mod id;
pub mod ports;
pub mod user;

pub use analytics::UsageTotals;
pub use driver::{DriverSeed, DriverStatus, DriverValidationError};
pub use error::{DomainError, ErrorCode};
pub use id::{RecordId, RecordIdError};
pub use user::{Credentials, NewUser, UserProfile};
