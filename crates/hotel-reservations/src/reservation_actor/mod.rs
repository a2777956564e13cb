//! # Reservation Actor
//!
//! Owns the `reservations` collection and drives the reservation lifecycle:
//!
//! ```text
//!   create ──► ACTIVE ──cancel──► CANCELED
//! ```
//!
//! `CANCELED` is terminal. Every transition is paired with a one-room change at the hotel.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_actor::ActorEntity) implementation for [`Reservation`]
//! - [`error`] - [`ReservationError`]
//! - [`actions`] - [`ReservationAction`] and [`ReservationActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor is started with `(CustomerClient, HotelClient)` as its context:
//!
//! ```rust,ignore
//! let (actor, reservations) = reservation_actor::new(32, storage);
//! tokio::spawn(actor.run((customer_client.clone(), hotel_client.clone())));
//! ```
//!
//! The actor handles one request at a time, including the awaited calls into the hotel
//! actor, so two reservation transitions never interleave.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::ReservationContext;
pub use error::*;

use crate::clients::ReservationClient;
use crate::model::Reservation;
use std::sync::Arc;
use store_actor::{CollectionStore, ResourceActor};

/// Creates a new Reservation actor and its client.
pub fn new(
    buffer_size: usize,
    storage: Arc<dyn CollectionStore>,
) -> (ResourceActor<Reservation>, ReservationClient) {
    let (actor, client) = ResourceActor::new(buffer_size, storage);
    (actor, ReservationClient::new(client))
}
