//! Error types for the Customer actor.

use crate::error::{ErrorKind, StoreError};
use store_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// An identifier or name was empty.
    #[error("Invalid customer: {0}")]
    Validation(String),

    /// The customer id is already taken.
    #[error("Customer already exists: {0}")]
    AlreadyExists(String),

    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// The customers collection could not be saved.
    #[error("Customer storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CustomerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CustomerError::Validation(_) => ErrorKind::Validation,
            CustomerError::AlreadyExists(_) => ErrorKind::Conflict,
            CustomerError::NotFound(_) => ErrorKind::NotFound,
            CustomerError::Storage(_) => ErrorKind::Storage,
            CustomerError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

impl StoreError for CustomerError {
    fn not_found(id: String) -> Self {
        CustomerError::NotFound(id)
    }

    fn conflict(id: String) -> Self {
        CustomerError::AlreadyExists(id)
    }

    fn storage(message: String) -> Self {
        CustomerError::Storage(message)
    }

    fn unavailable(message: String) -> Self {
        CustomerError::ActorCommunicationError(message)
    }
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        Self::from_framework(e)
    }
}
