//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the three actors, and hosts the inventory reconciliation pass.
//!
//! ## Wiring
//!
//! ```text
//!   ReservationActor ──► CustomerActor
//!          │
//!          └─────────► HotelActor
//! ```
//!
//! Actors are created first, without dependencies. The reservation actor then receives
//! `(CustomerClient, HotelClient)` through `run(context)`. The graph is acyclic, so
//! shutting down by dropping clients always terminates:
//!
//! 1. **Drop all clients** - closes the sender side of channels
//! 2. **Reservation actor stops** - its `recv()` returns `None`, dropping its context
//! 3. **Customer and hotel actors stop** - their last senders are gone
//! 4. **Await completion** - [`ReservationSystem::shutdown`] joins every task
//!
//! Every acknowledged write was persisted before its reply, so nothing is flushed at
//! shutdown.

pub mod reconcile;
pub mod reservation_system;

pub use reconcile::{find_drift, InventoryDrift, ReconcileReport};
pub use reservation_system::*;
