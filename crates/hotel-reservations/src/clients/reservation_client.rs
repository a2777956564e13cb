//! # Reservation Client
//!
//! Provides a high‑level API for interacting with the `Reservation` actor.
//! Orchestration (customer and hotel checks, room changes) happens inside the actor's
//! hooks; the client only sends requests.
use crate::model::{Reservation, ReservationCreate};
use crate::reservation_actor::{ReservationAction, ReservationActionResult, ReservationError};
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Reservation actor.
#[derive(Clone)]
pub struct ReservationClient {
    inner: ResourceClient<Reservation>,
}

impl ReservationClient {
    pub fn new(inner: ResourceClient<Reservation>) -> Self {
        Self { inner }
    }

    /// Creates an active reservation, taking one room of its hotel.
    #[instrument(skip(self))]
    pub async fn create_reservation(
        &self,
        params: ReservationCreate,
    ) -> Result<Reservation, ReservationError> {
        debug!("create_reservation called");
        info!("Sending create_reservation to actor");
        self.inner.create(params).await.map_err(ReservationError::from)
    }

    /// Cancels an active reservation and gives its room back.
    ///
    /// Returns the canceled reservation.
    #[instrument(skip(self))]
    pub async fn cancel_reservation(&self, id: String) -> Result<Reservation, ReservationError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ReservationAction::Cancel).await {
            Ok(ReservationActionResult::Canceled(reservation)) => Ok(reservation),
            Err(e) => Err(ReservationError::from(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Reservation> for ReservationClient {
    type Error = ReservationError;

    fn inner(&self) -> &ResourceClient<Reservation> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ReservationError::from(e)
    }
}
