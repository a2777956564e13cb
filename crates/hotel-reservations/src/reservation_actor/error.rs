//! Error types for the Reservation actor.

use crate::customer_actor::CustomerError;
use crate::error::{ErrorKind, StoreError};
use crate::hotel_actor::HotelError;
use store_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during reservation operations.
///
/// Failures of the customer and hotel actors are wrapped unchanged, so a full hotel
/// surfaces as a [`ErrorKind::Capacity`] failure of the reservation create.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReservationError {
    /// An identifier was empty.
    #[error("Invalid reservation: {0}")]
    Validation(String),

    /// The reservation id is already taken.
    #[error("Reservation already exists: {0}")]
    AlreadyExists(String),

    /// The requested reservation was not found.
    #[error("Reservation not found: {0}")]
    NotFound(String),

    /// The customer specified in the reservation does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// The hotel specified in the reservation does not exist.
    #[error("Hotel not found: {0}")]
    HotelNotFound(String),

    /// Cancellation is one-shot.
    #[error("Reservation {0} is already canceled")]
    AlreadyCanceled(String),

    /// Reservations are never removed.
    #[error("Reservation {0} cannot be deleted")]
    NotDeletable(String),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Hotel(#[from] HotelError),

    /// The cancellation is saved but its room went back to nobody.
    #[error("Reservation {reservation_id} is canceled but its room was not released: {source}")]
    RoomNotReleased {
        reservation_id: String,
        #[source]
        source: HotelError,
    },

    /// The reservations collection could not be saved.
    #[error("Reservation storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ReservationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReservationError::Validation(_) => ErrorKind::Validation,
            ReservationError::AlreadyExists(_) => ErrorKind::Conflict,
            ReservationError::NotFound(_)
            | ReservationError::CustomerNotFound(_)
            | ReservationError::HotelNotFound(_) => ErrorKind::NotFound,
            ReservationError::AlreadyCanceled(_) | ReservationError::NotDeletable(_) => {
                ErrorKind::InvalidState
            }
            ReservationError::Customer(e) => e.kind(),
            ReservationError::Hotel(e) => e.kind(),
            ReservationError::RoomNotReleased { source, .. } => source.kind(),
            ReservationError::Storage(_) => ErrorKind::Storage,
            ReservationError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

impl StoreError for ReservationError {
    fn not_found(id: String) -> Self {
        ReservationError::NotFound(id)
    }

    fn conflict(id: String) -> Self {
        ReservationError::AlreadyExists(id)
    }

    fn storage(message: String) -> Self {
        ReservationError::Storage(message)
    }

    fn unavailable(message: String) -> Self {
        ReservationError::ActorCommunicationError(message)
    }
}

impl From<FrameworkError> for ReservationError {
    fn from(e: FrameworkError) -> Self {
        Self::from_framework(e)
    }
}
