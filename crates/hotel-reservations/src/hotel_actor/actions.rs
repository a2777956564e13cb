//! Inventory actions for the Hotel actor.
//!
//! These are the only way `rooms_available` changes. Both move exactly one room, and each
//! is the sole gate for one side of the inventory bound.

/// Custom actions for Hotel entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelAction {
    /// Takes one room.
    ///
    /// # Errors
    /// Fails with [`HotelError::NoRoomsAvailable`](super::HotelError::NoRoomsAvailable)
    /// when no room is left.
    ReserveRoom,
    /// Gives one room back.
    ///
    /// # Errors
    /// Fails with [`HotelError::AllRoomsAvailable`](super::HotelError::AllRoomsAvailable)
    /// when no room is taken.
    ReleaseRoom,
}

/// Results from HotelActions - variants match 1:1 with HotelAction.
/// Each carries `rooms_available` after the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelActionResult {
    RoomReserved(u32),
    RoomReleased(u32),
}
