//! [`ActorEntity`] implementation for [`Reservation`].
//!
//! A reservation depends on the customer and hotel actors, injected as its context. The
//! hooks pair every lifecycle transition with its inventory change:
//!
//! | Transition | Hook | Hotel call |
//! |------------|------|------------|
//! | create | `on_create` (before save) | `reserve_room` |
//! | create, save failed | `on_create_aborted` | `release_room` |
//! | cancel | `after_action` (after save) | `release_room` |
//!
//! Create validates, then reserves, then saves. Cancel saves, then releases: a failure
//! between the two leaves a room unreleased (recoverable by reconciliation) rather than a
//! room handed out twice.

use super::actions::{ReservationAction, ReservationActionResult, ReservationUpdate};
use super::ReservationError;
use crate::clients::{ActorClient, CustomerClient, HotelClient};
use crate::model::{non_empty, Reservation, ReservationCreate};
use async_trait::async_trait;
use store_actor::ActorEntity;
use tracing::{info, warn};

/// The clients a reservation needs.
pub type ReservationContext = (CustomerClient, HotelClient);

fn required(field: &str, value: &str) -> Result<String, ReservationError> {
    non_empty(value).ok_or_else(|| ReservationError::Validation(format!("{field} must not be empty")))
}

#[async_trait]
impl ActorEntity for Reservation {
    type Id = String;
    type Create = ReservationCreate;
    type Update = ReservationUpdate;
    type Action = ReservationAction;
    type ActionResult = ReservationActionResult;
    type Context = ReservationContext;
    type Error = ReservationError;

    const COLLECTION: &'static str = "reservations";

    fn id(&self) -> &String {
        &self.reservation_id
    }

    fn from_create_params(params: ReservationCreate) -> Result<Self, ReservationError> {
        Ok(Self::new(
            required("reservation_id", &params.reservation_id)?,
            required("customer_id", &params.customer_id)?,
            required("hotel_id", &params.hotel_id)?,
        ))
    }

    fn is_consistent(&self) -> bool {
        !self.reservation_id.trim().is_empty()
    }

    /// Checks the customer, then the hotel, then takes a room.
    async fn on_create(&mut self, ctx: &ReservationContext) -> Result<(), ReservationError> {
        let (customers, hotels) = ctx;

        if customers.get(self.customer_id.clone()).await?.is_none() {
            return Err(ReservationError::CustomerNotFound(self.customer_id.clone()));
        }
        if hotels.get(self.hotel_id.clone()).await?.is_none() {
            return Err(ReservationError::HotelNotFound(self.hotel_id.clone()));
        }

        let left = hotels.reserve_room(self.hotel_id.clone()).await?;
        info!(reservation_id = %self.reservation_id, hotel_id = %self.hotel_id, rooms_available = left, "Room reserved");
        Ok(())
    }

    async fn on_create_aborted(&self, ctx: &ReservationContext) {
        let (_, hotels) = ctx;
        match hotels.release_room(self.hotel_id.clone()).await {
            Ok(left) => {
                info!(reservation_id = %self.reservation_id, hotel_id = %self.hotel_id, rooms_available = left, "Room returned after failed create")
            }
            Err(e) => {
                warn!(reservation_id = %self.reservation_id, hotel_id = %self.hotel_id, error = %e, "Room could not be returned after failed create")
            }
        }
    }

    async fn on_update(
        &mut self,
        update: ReservationUpdate,
        _ctx: &ReservationContext,
    ) -> Result<(), ReservationError> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &ReservationContext) -> Result<(), ReservationError> {
        Err(ReservationError::NotDeletable(self.reservation_id.clone()))
    }

    async fn handle_action(
        &mut self,
        action: ReservationAction,
        _ctx: &ReservationContext,
    ) -> Result<ReservationActionResult, ReservationError> {
        match action {
            ReservationAction::Cancel => {
                if !self.active {
                    return Err(ReservationError::AlreadyCanceled(self.reservation_id.clone()));
                }
                self.active = false;
                Ok(ReservationActionResult::Canceled(self.clone()))
            }
        }
    }

    /// Gives the room of a canceled reservation back.
    async fn after_action(
        &self,
        result: &ReservationActionResult,
        ctx: &ReservationContext,
    ) -> Result<(), ReservationError> {
        let (_, hotels) = ctx;
        match result {
            ReservationActionResult::Canceled(_) => {
                let left = hotels
                    .release_room(self.hotel_id.clone())
                    .await
                    .map_err(|source| ReservationError::RoomNotReleased {
                        reservation_id: self.reservation_id.clone(),
                        source,
                    })?;
                info!(reservation_id = %self.reservation_id, hotel_id = %self.hotel_id, rooms_available = left, "Room released");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_validates_every_identifier() {
        let create = |r: &str, c: &str, h: &str| {
            Reservation::from_create_params(ReservationCreate {
                reservation_id: r.into(),
                customer_id: c.into(),
                hotel_id: h.into(),
            })
        };

        assert_eq!(
            create(" R1 ", "C1", " H1").unwrap(),
            Reservation::new("R1", "C1", "H1")
        );
        for (r, c, h) in [("", "C1", "H1"), ("R1", " ", "H1"), ("R1", "C1", "")] {
            assert!(matches!(create(r, c, h), Err(ReservationError::Validation(_))));
        }
    }
}
