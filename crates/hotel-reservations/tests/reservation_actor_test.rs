use hotel_reservations::clients::{ActorClient, CustomerClient, HotelClient};
use hotel_reservations::hotel_actor::{HotelActionResult, HotelError};
use hotel_reservations::model::{Customer, Hotel, Reservation, ReservationCreate};
use hotel_reservations::reservation_actor::{self, ReservationError};
use std::sync::Arc;
use store_actor::mock::MockClient;
use store_actor::{FrameworkError, MemoryStore};

/// Real Reservation actor with mocked Customer and Hotel dependencies.
/// These tests exercise the reservation hooks while isolating them from the other actors.
fn create(reservation_id: &str, customer_id: &str, hotel_id: &str) -> ReservationCreate {
    ReservationCreate {
        reservation_id: reservation_id.into(),
        customer_id: customer_id.into(),
        hotel_id: hotel_id.into(),
    }
}

fn entity_error(e: HotelError) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

#[tokio::test]
async fn test_create_checks_customer_then_hotel_then_reserves() {
    let mut customer_mock = MockClient::<Customer>::new();
    let mut hotel_mock = MockClient::<Hotel>::new();

    customer_mock
        .expect_get("C1".to_string())
        .return_ok(Some(Customer::new("C1", "Ana")));
    hotel_mock
        .expect_get("H1".to_string())
        .return_ok(Some(Hotel::new("H1", "Grand", 1)));
    hotel_mock
        .expect_action("H1".to_string())
        .return_ok(HotelActionResult::RoomReserved(0));

    let (actor, reservations) = reservation_actor::new(10, Arc::new(MemoryStore::new()));
    let handle = tokio::spawn(actor.run((
        CustomerClient::new(customer_mock.client()),
        HotelClient::new(hotel_mock.client()),
    )));

    let created = reservations
        .create_reservation(create("R1", "C1", "H1"))
        .await
        .expect("create failed");
    assert_eq!(created, Reservation::new("R1", "C1", "H1"));
    assert!(reservations.get("R1".into()).await.unwrap().unwrap().active);

    customer_mock.verify();
    hotel_mock.verify();

    drop(reservations);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_customer_never_touches_hotel() {
    let mut customer_mock = MockClient::<Customer>::new();
    let hotel_mock = MockClient::<Hotel>::new();

    customer_mock.expect_get("C9".to_string()).return_ok(None);

    let (actor, reservations) = reservation_actor::new(10, Arc::new(MemoryStore::new()));
    tokio::spawn(actor.run((
        CustomerClient::new(customer_mock.client()),
        HotelClient::new(hotel_mock.client()),
    )));

    let err = reservations
        .create_reservation(create("R1", "C9", "ZZZ"))
        .await
        .unwrap_err();

    assert_eq!(err, ReservationError::CustomerNotFound("C9".into()));
    assert!(reservations.list().await.unwrap().is_empty());
    customer_mock.verify();
    hotel_mock.verify();
}

#[tokio::test]
async fn test_full_hotel_fails_create_without_saving() {
    let mut customer_mock = MockClient::<Customer>::new();
    let mut hotel_mock = MockClient::<Hotel>::new();

    let full = HotelError::NoRoomsAvailable {
        hotel_id: "H1".into(),
        rooms_total: 1,
    };
    customer_mock
        .expect_get("C1".to_string())
        .return_ok(Some(Customer::new("C1", "Ana")));
    hotel_mock.expect_get("H1".to_string()).return_ok(Some(Hotel {
        rooms_available: 0,
        ..Hotel::new("H1", "Grand", 1)
    }));
    hotel_mock
        .expect_action("H1".to_string())
        .return_err(entity_error(full.clone()));

    let (actor, reservations) = reservation_actor::new(10, Arc::new(MemoryStore::new()));
    tokio::spawn(actor.run((
        CustomerClient::new(customer_mock.client()),
        HotelClient::new(hotel_mock.client()),
    )));

    let err = reservations
        .create_reservation(create("R2", "C1", "H1"))
        .await
        .unwrap_err();

    assert_eq!(err, ReservationError::Hotel(full));
    assert!(reservations.get("R2".into()).await.unwrap().is_none());
    hotel_mock.verify();
}

#[tokio::test]
async fn test_cancel_reports_unreleased_room_but_stays_canceled() {
    let mut customer_mock = MockClient::<Customer>::new();
    let mut hotel_mock = MockClient::<Hotel>::new();

    customer_mock
        .expect_get("C1".to_string())
        .return_ok(Some(Customer::new("C1", "Ana")));
    hotel_mock
        .expect_get("H1".to_string())
        .return_ok(Some(Hotel::new("H1", "Grand", 1)));
    hotel_mock
        .expect_action("H1".to_string())
        .return_ok(HotelActionResult::RoomReserved(0));
    // The release after cancellation fails.
    hotel_mock
        .expect_action("H1".to_string())
        .return_err(FrameworkError::ActorClosed);

    let (actor, reservations) = reservation_actor::new(10, Arc::new(MemoryStore::new()));
    tokio::spawn(actor.run((
        CustomerClient::new(customer_mock.client()),
        HotelClient::new(hotel_mock.client()),
    )));

    reservations
        .create_reservation(create("R1", "C1", "H1"))
        .await
        .unwrap();
    let err = reservations
        .cancel_reservation("R1".into())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ReservationError::RoomNotReleased { ref reservation_id, .. } if reservation_id == "R1"
    ));
    assert!(!reservations.get("R1".into()).await.unwrap().unwrap().active);

    // One-shot: the second cancel fails before reaching the hotel.
    let again = reservations
        .cancel_reservation("R1".into())
        .await
        .unwrap_err();
    assert_eq!(again, ReservationError::AlreadyCanceled("R1".into()));

    customer_mock.verify();
    hotel_mock.verify();
}
