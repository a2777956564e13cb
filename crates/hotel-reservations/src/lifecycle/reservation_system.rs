use super::reconcile::{self, ReconcileReport};
use crate::clients::{CustomerClient, HotelClient, ReservationClient};
use crate::config::StoreConfig;
use crate::customer_actor::CustomerError;
use crate::error::ErrorKind;
use crate::hotel_actor::HotelError;
use crate::reservation_actor::ReservationError;
use std::sync::Arc;
use store_actor::{CollectionStore, JsonFileStore};
use thiserror::Error;
use tracing::{error, info};

/// Failures of system-level operations.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Hotel(#[from] HotelError),

    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error("Actor task failed: {0}")]
    ActorFailed(String),
}

impl SystemError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SystemError::Customer(e) => e.kind(),
            SystemError::Hotel(e) => e.kind(),
            SystemError::Reservation(e) => e.kind(),
            SystemError::ActorFailed(_) => ErrorKind::Unavailable,
        }
    }
}

/// The runtime orchestrator for the reservation system.
///
/// `ReservationSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: The Reservation actor gets the Customer and Hotel clients
/// - **Shared Storage**: All three actors persist through one adapter, each to its own
///   collection
///
/// # Example
///
/// ```ignore
/// let system = ReservationSystem::open(&StoreConfig::from_env()?);
///
/// system.customer_client.create_customer(customer).await?;
/// system.hotel_client.create_hotel(hotel).await?;
/// system.reservation_client.create_reservation(reservation).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ReservationSystem {
    /// Client for interacting with the Customer actor
    pub customer_client: CustomerClient,

    /// Client for interacting with the Hotel actor
    pub hotel_client: HotelClient,

    /// Client for interacting with the Reservation actor
    pub reservation_client: ReservationClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ReservationSystem {
    /// Spawns the three actors over `storage`. Must be called inside a Tokio runtime.
    ///
    /// `channel_capacity` bounds each actor's request queue (at least 1).
    pub fn new(storage: Arc<dyn CollectionStore>, channel_capacity: usize) -> Self {
        let capacity = channel_capacity.max(1);

        // 1. Create actors (no dependencies)
        let (customer_actor, customer_client) = crate::customer_actor::new(capacity, storage.clone());
        let (hotel_actor, hotel_client) = crate::hotel_actor::new(capacity, storage.clone());
        let (reservation_actor, reservation_client) = crate::reservation_actor::new(capacity, storage);

        // 2. Start actors with injected context
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let hotel_handle = tokio::spawn(hotel_actor.run(()));

        // Reservation actor needs Customer and Hotel clients
        let reservation_handle = tokio::spawn(
            reservation_actor.run((customer_client.clone(), hotel_client.clone())),
        );

        Self {
            customer_client,
            hotel_client,
            reservation_client,
            handles: vec![customer_handle, hotel_handle, reservation_handle],
        }
    }

    /// Starts the system over JSON files in `config.data_dir`.
    pub fn open(config: &StoreConfig) -> Self {
        info!(data_dir = %config.data_dir.display(), "Opening reservation system");
        let storage = Arc::new(JsonFileStore::new(config.data_dir.clone()));
        Self::new(storage, config.channel_capacity)
    }

    /// Checks every hotel's availability against its active reservations, repairing drift
    /// when `repair` is set. See [`reconcile`](super::reconcile).
    pub async fn reconcile(&self, repair: bool) -> Result<ReconcileReport, SystemError> {
        reconcile::reconcile(&self.hotel_client, &self.reservation_client, repair).await
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels. The reservation actor holds clones
    /// of the customer and hotel clients, so those two stop once it has stopped.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.reservation_client);
        drop(self.customer_client);
        drop(self.hotel_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
