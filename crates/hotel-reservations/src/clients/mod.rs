//! Typed clients for the three actors.
//!
//! Each wraps a [`ResourceClient`](store_actor::ResourceClient), exposes the store's write
//! operations with its own error type, and inherits `get`/`list` from [`ActorClient`].

pub mod customer_client;
pub mod hotel_client;
pub mod reservation_client;

pub use customer_client::CustomerClient;
pub use hotel_client::HotelClient;
pub use reservation_client::ReservationClient;
pub use store_actor::ActorClient;
