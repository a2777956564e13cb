//! # Hotel Actor
//!
//! Owns the `hotels` collection and its room inventory.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_actor::ActorEntity) implementation for [`Hotel`]
//! - [`error`] - [`HotelError`] type for type-safe error handling
//! - [`actions`] - [`HotelAction`] and [`HotelActionResult`] for inventory changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Take one room (fails when none is left)
//! let left = hotel_client.reserve_room("H1".into()).await?;
//!
//! // Give one room back (fails when all rooms are free)
//! let left = hotel_client.release_room("H1".into()).await?;
//! ```
//!
//! Because the actor handles requests one at a time, two callers racing for the last room
//! get exactly one success and one [`HotelError::NoRoomsAvailable`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::HotelClient;
use crate::model::Hotel;
use std::sync::Arc;
use store_actor::{CollectionStore, ResourceActor};

/// Creates a new Hotel actor and its client.
pub fn new(buffer_size: usize, storage: Arc<dyn CollectionStore>) -> (ResourceActor<Hotel>, HotelClient) {
    let (actor, client) = ResourceActor::new(buffer_size, storage);
    (actor, HotelClient::new(client))
}
