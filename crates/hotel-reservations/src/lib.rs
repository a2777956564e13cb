//! # Hotel Reservations
//!
//! Customers, hotels with a finite number of rooms, and reservations that take one room
//! each. Every collection is owned by one [`store_actor::ResourceActor`]; the reservation
//! actor pairs each lifecycle transition with a one-room change at the hotel.
//!
//! - [`model`]: the persisted records and their create/update payloads
//! - [`customer_actor`], [`hotel_actor`], [`reservation_actor`]: entity logic and errors
//! - [`clients`]: typed clients for each actor
//! - [`lifecycle`]: [`ReservationSystem`](lifecycle::ReservationSystem) wiring and
//!   inventory reconciliation
//! - [`config`]: data directory and channel sizing from the environment
//! - [`error`]: the [`ErrorKind`](error::ErrorKind) every store error classifies into

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod error;
pub mod hotel_actor;
pub mod lifecycle;
pub mod model;
pub mod reservation_actor;
