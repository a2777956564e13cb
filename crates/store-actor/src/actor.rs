//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and persisted state of one collection. It implements the "Server" side of the Actor
//! Model, processing messages sequentially and ensuring exclusive access to the collection.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::storage::{decode_records, encode_records, CollectionStore};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one persisted collection.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`entries`), the
/// receiver end of the channel and the persistence adapter for its collection.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so every request is one
/// complete read-modify-write transaction on the collection. Two callers racing to take
/// the last room of a hotel are served one after the other: the second one sees the first
/// one's write. No `Mutex` or `RwLock` is needed for the entries.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust,ignore
/// let storage: Arc<dyn CollectionStore> = Arc::new(MemoryStore::new());
/// let (actor, client) = ResourceActor::<Hotel>::new(32, storage);
/// tokio::spawn(actor.run(()));
/// let hotel = client.create(HotelCreate { .. }).await?;
/// ```
///
/// # Implementation Details
///
/// Entries are kept in a `Vec` (insertion order, which is the order `List` returns and
/// the order records are saved in) with a `HashMap` index from id to position.
///
/// Every write builds a candidate, saves the full collection *with the candidate in place*
/// and only then commits it to memory. A failed save leaves memory untouched and is
/// reported as [`FrameworkError::Storage`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    storage: Arc<dyn CollectionStore>,
    entries: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `storage` - Persistence adapter holding [`ActorEntity::COLLECTION`].
    pub fn new(buffer_size: usize, storage: Arc<dyn CollectionStore>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            storage,
            entries: Vec::new(),
            index: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The collection is loaded from storage before the first message is handled.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = T::COLLECTION;
        self.hydrate().await;
        info!(entity_type, size = self.entries.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(params, &context).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|pos| self.entries[pos].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.entries.len(), "List");
                    let _ = respond_to.send(Ok(self.entries.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let _ = respond_to.send(self.update(id, update, &context).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let _ = respond_to.send(self.delete(id, &context).await);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let _ = respond_to.send(self.perform_action(id, action, &context).await);
                }
            }
        }

        info!(entity_type, size = self.entries.len(), "Shutdown");
    }

    async fn hydrate(&mut self) {
        let records = self.storage.load(T::COLLECTION).await;
        for item in decode_records::<T>(T::COLLECTION, records) {
            if !item.is_consistent() {
                warn!(entity_type = T::COLLECTION, id = %item.id(), "Skipping inconsistent record");
                continue;
            }
            // Later duplicates replace the earlier record in place.
            match self.index.get(item.id()) {
                Some(&pos) => self.entries[pos] = item,
                None => {
                    self.index.insert(item.id().clone(), self.entries.len());
                    self.entries.push(item);
                }
            }
        }
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Entries as they would look with `candidate` placed at `slot`.
    fn snapshot<'a>(&'a self, slot: Slot, candidate: Option<&'a T>) -> Vec<&'a T> {
        match (slot, candidate) {
            (Slot::Replace(pos), Some(candidate)) => self
                .entries
                .iter()
                .enumerate()
                .map(|(i, item)| if i == pos { candidate } else { item })
                .collect(),
            (Slot::Append, Some(candidate)) => {
                self.entries.iter().chain(std::iter::once(candidate)).collect()
            }
            (Slot::Remove(pos), _) => self
                .entries
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != pos)
                .map(|(_, item)| item)
                .collect(),
            (_, None) => self.entries.iter().collect(),
        }
    }

    /// Saves the full collection with `candidate` at `slot`.
    ///
    /// The snapshot is encoded eagerly; the returned future owns everything it needs.
    fn persist(
        &self,
        slot: Slot,
        candidate: Option<&T>,
    ) -> impl Future<Output = Result<(), FrameworkError>> + Send + 'static {
        let storage = Arc::clone(&self.storage);
        let records = encode_records(T::COLLECTION, self.snapshot(slot, candidate));
        async move {
            let records = records?;
            storage.save(T::COLLECTION, &records).await?;
            Ok::<(), FrameworkError>(())
        }
    }

    async fn create(&mut self, params: T::Create, ctx: &T::Context) -> Result<T, FrameworkError> {
        let entity_type = T::COLLECTION;
        let mut item = T::from_create_params(params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        let id = item.id().clone();
        if self.index.contains_key(&id) {
            warn!(entity_type, %id, "Already exists");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        if let Err(e) = item.on_create(ctx).await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        if let Err(e) = self.persist(Slot::Append, Some(&item)).await {
            warn!(entity_type, %id, error = %e, "Persist failed, aborting create");
            item.on_create_aborted(ctx).await;
            return Err(e);
        }

        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(item.clone());
        info!(entity_type, %id, size = self.entries.len(), "Created");
        Ok(item)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = T::COLLECTION;
        let Some(pos) = self.position(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut candidate = self.entries[pos].clone();
        if let Err(e) = candidate.on_update(update, ctx).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        if let Err(e) = self.persist(Slot::Replace(pos), Some(&candidate)).await {
            warn!(entity_type, %id, error = %e, "Persist failed");
            return Err(e);
        }

        self.entries[pos] = candidate.clone();
        info!(entity_type, %id, "Updated");
        Ok(candidate)
    }

    async fn delete(&mut self, id: T::Id, ctx: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = T::COLLECTION;
        let Some(pos) = self.position(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        if let Err(e) = self.entries[pos].on_delete(ctx).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        if let Err(e) = self.persist(Slot::Remove(pos), None).await {
            warn!(entity_type, %id, error = %e, "Persist failed");
            return Err(e);
        }

        self.entries.remove(pos);
        self.reindex();
        info!(entity_type, %id, size = self.entries.len(), "Deleted");
        Ok(())
    }

    async fn perform_action(
        &mut self,
        id: T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = T::COLLECTION;
        let Some(pos) = self.position(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut candidate = self.entries[pos].clone();
        let result = match candidate.handle_action(action, ctx).await {
            Ok(result) => result,
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        };

        if let Err(e) = self.persist(Slot::Replace(pos), Some(&candidate)).await {
            warn!(entity_type, %id, error = %e, "Persist failed");
            return Err(e);
        }

        self.entries[pos] = candidate;
        info!(entity_type, %id, "Action ok");

        if let Err(e) = self.entries[pos].after_action(&result, ctx).await {
            warn!(entity_type, %id, error = %e, "after_action failed, state already committed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        Ok(result)
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id().clone(), pos))
            .collect();
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Append,
    Replace(usize),
    Remove(usize),
}
