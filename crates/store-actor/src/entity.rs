//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every persisted resource (Customer, Hotel,
//! Reservation, …) implements to be managed by the generic `ResourceActor`. It names the
//! collection the entity lives in, the DTOs for create/update/action requests, the runtime
//! context and the error type, and provides lifecycle hooks around every write.
//!
//! # Write Pipeline
//!
//! Every write follows the same order inside the actor:
//!
//! 1. Build a *candidate* (a new entity, or a clone of the stored one).
//! 2. Run the hook (`on_create`, `on_update`, `handle_action`, `on_delete`).
//! 3. Persist the whole collection with the candidate in place.
//! 4. Commit the candidate to memory.
//! 5. Run the post-commit hook (`after_action`) where one exists.
//!
//! When step 3 fails after `on_create` already produced side effects in other actors,
//! `on_create_aborted` runs so the entity can undo them.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
///
/// # Identity
/// Identifiers are supplied by the caller inside the create payload and read back through
/// [`ActorEntity::id`]. The actor rejects a create whose id is already stored.
#[async_trait]
pub trait ActorEntity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `ReserveRoom`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients deal with a single error
    /// type and match on the variants they care about.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of the persisted collection (e.g. `"hotels"`).
    const COLLECTION: &'static str;

    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the create payload, validating it.
    /// This is called synchronously before `on_create`.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Checks an entity decoded from storage. Returning `false` skips the record on load.
    fn is_consistent(&self) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the duplicate-id check and before the new entity is persisted.
    /// Use this hook to perform validation or side effects (e.g., checking other actors).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when `on_create` succeeded but persisting the new entity failed.
    async fn on_create_aborted(&self, _ctx: &Self::Context) {}

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handlers (Async) ---

    /// Handle a custom resource-specific action against the candidate state.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called after an action's new state has been persisted and committed.
    ///
    /// An error here is reported to the caller, but the committed state stays.
    async fn after_action(
        &self,
        _result: &Self::ActionResult,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
