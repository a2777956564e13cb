use serde::{Deserialize, Serialize};

fn active_by_default() -> bool {
    true
}

/// A reservation binding a customer to one room of a hotel.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](store_actor::ActorEntity) trait and is stored
/// in the `reservations` collection by a [`ResourceActor`](store_actor::ResourceActor).
///
/// # Lifecycle
/// A reservation is created `active` while holding one room, and is canceled at most once,
/// giving the room back. It is never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub customer_id: String,
    pub hotel_id: String,
    /// Records written before cancellation existed carry no flag; they are active.
    #[serde(default = "active_by_default")]
    pub active: bool,
}

impl Reservation {
    pub fn new(
        reservation_id: impl Into<String>,
        customer_id: impl Into<String>,
        hotel_id: impl Into<String>,
    ) -> Self {
        Self {
            reservation_id: reservation_id.into(),
            customer_id: customer_id.into(),
            hotel_id: hotel_id.into(),
            active: true,
        }
    }
}

/// Payload for creating a reservation.
#[derive(Debug, Clone)]
pub struct ReservationCreate {
    pub reservation_id: String,
    pub customer_id: String,
    pub hotel_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_active_flag_loads_as_active() {
        let reservation: Reservation = serde_json::from_value(serde_json::json!({
            "reservation_id": "R1",
            "customer_id": "C1",
            "hotel_id": "H1"
        }))
        .unwrap();
        assert!(reservation.active);
    }

    #[test]
    fn test_missing_hotel_id_is_rejected() {
        let result = serde_json::from_value::<Reservation>(serde_json::json!({
            "reservation_id": "R1",
            "customer_id": "C1",
            "active": true
        }));
        assert!(result.is_err());
    }
}
