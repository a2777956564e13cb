//! # Customer Actor
//!
//! Owns the `customers` collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_actor::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = customer_actor::new(32, storage);
//! tokio::spawn(actor.run(()));
//!
//! let ana = client.create_customer(CustomerCreate { customer_id: "C1".into(), name: "Ana".into() }).await?;
//! client.rename_customer("C1".into(), "Ana Maria".into()).await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use std::sync::Arc;
use store_actor::{CollectionStore, ResourceActor};

/// Creates a new Customer actor and its client.
pub fn new(
    buffer_size: usize,
    storage: Arc<dyn CollectionStore>,
) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, client) = ResourceActor::new(buffer_size, storage);
    (actor, CustomerClient::new(client))
}
