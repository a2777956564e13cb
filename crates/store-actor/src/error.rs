//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! Entity-specific failures travel inside [`FrameworkError::EntityError`]; clients recover
//! the typed error with [`FrameworkError::into_entity_error`].

use crate::storage::StorageError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` for every other variant, or when the boxed error is of a
    /// different type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(boxed) => match boxed.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("sold out")]
    struct SoldOut;

    #[test]
    fn test_entity_error_downcasts_to_original_type() {
        let err = FrameworkError::EntityError(Box::new(SoldOut));
        assert_eq!(err.into_entity_error::<SoldOut>().unwrap(), SoldOut);
    }

    #[test]
    fn test_other_variants_are_returned_unchanged() {
        let err = FrameworkError::NotFound("H1".into());
        assert!(matches!(
            err.into_entity_error::<SoldOut>(),
            Err(FrameworkError::NotFound(id)) if id == "H1"
        ));
    }

    #[test]
    fn test_foreign_entity_error_is_kept() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            err.into_entity_error::<SoldOut>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
