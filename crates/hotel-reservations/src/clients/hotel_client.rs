//! # Hotel Client
//!
//! Provides a high‑level API for interacting with the `Hotel` actor.
//! It wraps a `ResourceClient<Hotel>` and exposes the inventory actions as plain methods.
use crate::hotel_actor::{HotelAction, HotelActionResult, HotelError};
use crate::model::{Hotel, HotelCreate, HotelUpdate};
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Hotel actor.
#[derive(Clone)]
pub struct HotelClient {
    inner: ResourceClient<Hotel>,
}

impl HotelClient {
    pub fn new(inner: ResourceClient<Hotel>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_hotel(&self, params: HotelCreate) -> Result<Hotel, HotelError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(HotelError::from)
    }

    #[instrument(skip(self))]
    pub async fn rename_hotel(&self, id: String, name: String) -> Result<Hotel, HotelError> {
        debug!("Sending request");
        self.inner
            .update(id, HotelUpdate { name })
            .await
            .map_err(HotelError::from)
    }

    /// Take one room of a hotel.
    ///
    /// Returns the number of rooms still available.
    #[instrument(skip(self))]
    pub async fn reserve_room(&self, id: String) -> Result<u32, HotelError> {
        debug!("Reserving a room at hotel {}", id);
        match self.inner.perform_action(id, HotelAction::ReserveRoom).await {
            Ok(HotelActionResult::RoomReserved(left)) => Ok(left),
            Ok(other) => Err(HotelError::ActorCommunicationError(format!(
                "unexpected reply to ReserveRoom: {other:?}"
            ))),
            Err(e) => Err(HotelError::from(e)),
        }
    }

    /// Give one room of a hotel back.
    ///
    /// Returns the number of rooms available afterwards.
    #[instrument(skip(self))]
    pub async fn release_room(&self, id: String) -> Result<u32, HotelError> {
        debug!("Releasing a room at hotel {}", id);
        match self.inner.perform_action(id, HotelAction::ReleaseRoom).await {
            Ok(HotelActionResult::RoomReleased(left)) => Ok(left),
            Ok(other) => Err(HotelError::ActorCommunicationError(format!(
                "unexpected reply to ReleaseRoom: {other:?}"
            ))),
            Err(e) => Err(HotelError::from(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Hotel> for HotelClient {
    type Error = HotelError;

    fn inner(&self) -> &ResourceClient<Hotel> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        HotelError::from(e)
    }
}
