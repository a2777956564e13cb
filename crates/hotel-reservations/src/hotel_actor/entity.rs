//! [`ActorEntity`] implementation for [`Hotel`].
//!
//! Includes the room inventory actions. See [`HotelAction`].

use super::actions::{HotelAction, HotelActionResult};
use super::HotelError;
use crate::model::{non_empty, Hotel, HotelCreate, HotelUpdate};
use async_trait::async_trait;
use store_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Hotel {
    type Id = String;
    type Create = HotelCreate;
    type Update = HotelUpdate;
    type Action = HotelAction;
    type ActionResult = HotelActionResult;
    type Context = ();
    type Error = HotelError;

    const COLLECTION: &'static str = "hotels";

    fn id(&self) -> &String {
        &self.hotel_id
    }

    /// Validates the payload. The new hotel has every room available.
    fn from_create_params(params: HotelCreate) -> Result<Self, HotelError> {
        let hotel_id = non_empty(&params.hotel_id)
            .ok_or_else(|| HotelError::Validation("hotel_id must not be empty".into()))?;
        let name = non_empty(&params.name)
            .ok_or_else(|| HotelError::Validation("name must not be empty".into()))?;
        if params.rooms_total == 0 {
            return Err(HotelError::Validation(format!(
                "hotel {hotel_id} needs at least one room"
            )));
        }
        Ok(Self::new(hotel_id, name, params.rooms_total))
    }

    fn is_consistent(&self) -> bool {
        !self.hotel_id.trim().is_empty()
            && self.rooms_total > 0
            && self.rooms_available <= self.rooms_total
    }

    /// Renames the hotel. Inventory is untouched.
    async fn on_update(&mut self, update: HotelUpdate, _ctx: &()) -> Result<(), HotelError> {
        self.name = non_empty(&update.name)
            .ok_or_else(|| HotelError::Validation("name must not be empty".into()))?;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), HotelError> {
        Err(HotelError::NotDeletable(self.hotel_id.clone()))
    }

    async fn handle_action(
        &mut self,
        action: HotelAction,
        _ctx: &(),
    ) -> Result<HotelActionResult, HotelError> {
        match action {
            HotelAction::ReserveRoom => {
                if self.rooms_available == 0 {
                    return Err(HotelError::NoRoomsAvailable {
                        hotel_id: self.hotel_id.clone(),
                        rooms_total: self.rooms_total,
                    });
                }
                self.rooms_available -= 1;
                Ok(HotelActionResult::RoomReserved(self.rooms_available))
            }
            HotelAction::ReleaseRoom => {
                if self.rooms_available >= self.rooms_total {
                    return Err(HotelError::AllRoomsAvailable {
                        hotel_id: self.hotel_id.clone(),
                        rooms_total: self.rooms_total,
                    });
                }
                self.rooms_available += 1;
                Ok(HotelActionResult::RoomReleased(self.rooms_available))
            }
        }
    }
}
