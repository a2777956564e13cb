//! Lifecycle actions for the Reservation actor.

use crate::model::Reservation;

/// Custom actions for Reservation entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationAction {
    /// Moves an active reservation to canceled and gives its room back.
    Cancel,
}

/// Results from ReservationActions - variants match 1:1 with ReservationAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationActionResult {
    /// The reservation as saved after cancellation.
    Canceled(Reservation),
}

/// Reservations are never updated in place; this type has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationUpdate {}
