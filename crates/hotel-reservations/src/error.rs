//! # Error Taxonomy
//!
//! Every store has its own error enum ([`CustomerError`](crate::customer_actor::CustomerError),
//! [`HotelError`](crate::hotel_actor::HotelError),
//! [`ReservationError`](crate::reservation_actor::ReservationError)). They all classify
//! into one [`ErrorKind`], which is what callers branch on.

use serde::Serialize;
use std::fmt::{self, Display};
use store_actor::FrameworkError;

/// Failure classes shared by all stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input: empty identifier or name, zero rooms.
    Validation,
    /// The identifier is already taken.
    Conflict,
    /// A referenced entity does not exist.
    NotFound,
    /// No room left to reserve.
    Capacity,
    /// Releasing a room of a hotel whose rooms are all available.
    Overrelease,
    /// The requested transition is not allowed from the current state.
    InvalidState,
    /// The persistence adapter refused a write.
    Storage,
    /// The owning actor is gone.
    Unavailable,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Capacity => "capacity",
            ErrorKind::Overrelease => "overrelease",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::Storage => "storage",
            ErrorKind::Unavailable => "unavailable",
        };
        f.write_str(name)
    }
}

/// Conversion from [`FrameworkError`] into a store's own error type.
///
/// Entity errors are unwrapped back into the store's type; the other framework variants
/// map onto the constructors below.
pub(crate) trait StoreError: std::error::Error + Send + Sync + Sized + 'static {
    fn not_found(id: String) -> Self;
    fn conflict(id: String) -> Self;
    fn storage(message: String) -> Self;
    fn unavailable(message: String) -> Self;

    fn from_framework(error: FrameworkError) -> Self {
        match error.into_entity_error::<Self>() {
            Ok(error) => error,
            Err(FrameworkError::NotFound(id)) => Self::not_found(id),
            Err(FrameworkError::AlreadyExists(id)) => Self::conflict(id),
            Err(FrameworkError::Storage(e)) => Self::storage(e.to_string()),
            Err(other) => Self::unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_in_snake_case() {
        let json = serde_json::to_string(&ErrorKind::InvalidState).unwrap();
        assert_eq!(json, "\"invalid_state\"");
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
    }
}
