//! # Store Actor
//!
//! Building blocks for persisted, single-writer resource collections. Each collection
//! (customers, hotels, reservations, …) is owned by one [`ResourceActor`] running in its own
//! Tokio task. Callers talk to it through a cloneable [`ResourceClient`]; the actor handles
//! requests one at a time and writes the whole collection through a [`CollectionStore`]
//! before any change becomes visible.
//!
//! ## Why one actor per collection?
//!
//! A persisted collection is a read-modify-write resource: load the records, change one,
//! save them all. Two concurrent writers on the same file lose each other's updates. With a
//! single actor owning the collection, every request is a complete transaction and no lock
//! is needed:
//!
//! - **Isolation**: each collection has its own actor and its own in-memory state.
//! - **Coordination**: when collections need to interact (a reservation taking a hotel
//!   room), the dependent actor calls the other one through its client.
//! - **Durability**: a write is acknowledged only after the adapter accepted the new
//!   collection contents.
//!
//! **Further Reading**:
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain records and their hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and persistence
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//! 4. **Storage Layer** ([`CollectionStore`]) - JSON files ([`JsonFileStore`]) or memory
//!    ([`MemoryStore`])
//!
//! ## Defining an entity
//!
//! ```rust,ignore
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Customer {
//!     customer_id: String,
//!     name: String,
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Customer {
//!     type Id = String;
//!     type Create = CustomerCreate;
//!     type Update = CustomerUpdate;
//!     type Action = ();
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = CustomerError;
//!
//!     const COLLECTION: &'static str = "customers";
//!
//!     fn id(&self) -> &String {
//!         &self.customer_id
//!     }
//!
//!     fn from_create_params(params: CustomerCreate) -> Result<Self, CustomerError> {
//!         Ok(Self { customer_id: params.customer_id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, update: CustomerUpdate, _: &()) -> Result<(), CustomerError> {
//!         self.name = update.name;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), CustomerError> {
//!         Ok(())
//!     }
//! }
//!
//! let storage: Arc<dyn CollectionStore> = Arc::new(JsonFileStore::new("data"));
//! let (actor, client) = ResourceActor::<Customer>::new(32, storage);
//! tokio::spawn(actor.run(()));
//! let alice = client.create(CustomerCreate { customer_id: "C1".into(), name: "Alice".into() }).await?;
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! The reservation actor is started with `(CustomerClient, HotelClient)` as its context, so
//! its `on_create` hook can check the customer and take a hotel room.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations, so code that depends
//! on another actor can be tested without spawning it. [`MemoryStore`] replaces the file
//! adapter in tests and can be pre-seeded with records.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod storage;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use storage::{CollectionStore, JsonFileStore, MemoryStore, Record, StorageError};
