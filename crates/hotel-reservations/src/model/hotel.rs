use serde::{Deserialize, Serialize};

/// A hotel with a fixed number of rooms.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](store_actor::ActorEntity) trait and is stored
/// in the `hotels` collection by a [`ResourceActor`](store_actor::ResourceActor).
///
/// `rooms_available` only moves one room at a time through the
/// [`HotelAction`](crate::hotel_actor::HotelAction)s, and always stays within
/// `0..=rooms_total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: String,
    pub name: String,
    pub rooms_total: u32,
    pub rooms_available: u32,
}

impl Hotel {
    /// A new hotel starts with every room available.
    pub fn new(hotel_id: impl Into<String>, name: impl Into<String>, rooms_total: u32) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            name: name.into(),
            rooms_total,
            rooms_available: rooms_total,
        }
    }

    pub fn rooms_reserved(&self) -> u32 {
        self.rooms_total - self.rooms_available
    }
}

/// Payload for creating a hotel.
#[derive(Debug, Clone)]
pub struct HotelCreate {
    pub hotel_id: String,
    pub name: String,
    pub rooms_total: u32,
}

/// Payload for renaming a hotel. Inventory is never updated this way.
#[derive(Debug, Clone)]
pub struct HotelUpdate {
    pub name: String,
}
