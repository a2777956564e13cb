//! Domain records and the payloads that create or change them.

pub mod customer;
pub mod hotel;
pub mod reservation;

pub use customer::*;
pub use hotel::*;
pub use reservation::*;

/// Trims `value`, returning `None` when nothing is left.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
