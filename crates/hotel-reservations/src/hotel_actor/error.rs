//! Error types for the Hotel actor.

use crate::error::{ErrorKind, StoreError};
use store_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during hotel operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HotelError {
    /// An identifier or name was empty, or the hotel has no rooms.
    #[error("Invalid hotel: {0}")]
    Validation(String),

    /// The hotel id is already taken.
    #[error("Hotel already exists: {0}")]
    AlreadyExists(String),

    /// The requested hotel was not found.
    #[error("Hotel not found: {0}")]
    NotFound(String),

    /// Every room of the hotel is taken.
    #[error("No rooms available at hotel {hotel_id} ({rooms_total} total)")]
    NoRoomsAvailable { hotel_id: String, rooms_total: u32 },

    /// Every room of the hotel is already free.
    #[error("All {rooms_total} rooms of hotel {hotel_id} are already available")]
    AllRoomsAvailable { hotel_id: String, rooms_total: u32 },

    /// Hotels are never removed.
    #[error("Hotel {0} cannot be deleted")]
    NotDeletable(String),

    /// The hotels collection could not be saved.
    #[error("Hotel storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl HotelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HotelError::Validation(_) => ErrorKind::Validation,
            HotelError::AlreadyExists(_) => ErrorKind::Conflict,
            HotelError::NotFound(_) => ErrorKind::NotFound,
            HotelError::NoRoomsAvailable { .. } => ErrorKind::Capacity,
            HotelError::AllRoomsAvailable { .. } => ErrorKind::Overrelease,
            HotelError::NotDeletable(_) => ErrorKind::InvalidState,
            HotelError::Storage(_) => ErrorKind::Storage,
            HotelError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

impl StoreError for HotelError {
    fn not_found(id: String) -> Self {
        HotelError::NotFound(id)
    }

    fn conflict(id: String) -> Self {
        HotelError::AlreadyExists(id)
    }

    fn storage(message: String) -> Self {
        HotelError::Storage(message)
    }

    fn unavailable(message: String) -> Self {
        HotelError::ActorCommunicationError(message)
    }
}

impl From<FrameworkError> for HotelError {
    fn from(e: FrameworkError) -> Self {
        Self::from_framework(e)
    }
}
