use async_trait::async_trait;
use hotel_reservations::clients::ActorClient;
use hotel_reservations::config::StoreConfig;
use hotel_reservations::error::ErrorKind;
use hotel_reservations::lifecycle::ReservationSystem;
use hotel_reservations::model::{CustomerCreate, HotelCreate, ReservationCreate};
use hotel_reservations::reservation_actor::ReservationError;
use serde_json::json;
use std::sync::Arc;
use store_actor::{CollectionStore, MemoryStore, Record, StorageError};

fn customer(id: &str, name: &str) -> CustomerCreate {
    CustomerCreate {
        customer_id: id.into(),
        name: name.into(),
    }
}

fn hotel(id: &str, rooms_total: u32) -> HotelCreate {
    HotelCreate {
        hotel_id: id.into(),
        name: format!("Hotel {id}"),
        rooms_total,
    }
}

fn reservation(id: &str, customer_id: &str, hotel_id: &str) -> ReservationCreate {
    ReservationCreate {
        reservation_id: id.into(),
        customer_id: customer_id.into(),
        hotel_id: hotel_id.into(),
    }
}

fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

async fn rooms_available(system: &ReservationSystem, hotel_id: &str) -> u32 {
    system
        .hotel_client
        .get(hotel_id.into())
        .await
        .unwrap()
        .expect("hotel not found")
        .rooms_available
}

/// System with customer C1 and hotel H1 (`rooms_total` rooms).
async fn seeded_system(storage: Arc<dyn CollectionStore>, rooms_total: u32) -> ReservationSystem {
    let system = ReservationSystem::new(storage, 10);
    system
        .customer_client
        .create_customer(customer("C1", "Ana"))
        .await
        .unwrap();
    system
        .hotel_client
        .create_hotel(hotel("H1", rooms_total))
        .await
        .unwrap();
    system
}

/// Full end-to-end test with all real actors: reserve, overbook, cancel, cancel again.
#[tokio::test]
async fn test_reservation_lifecycle_scenarios() {
    let storage = Arc::new(MemoryStore::new());
    let system = seeded_system(storage.clone(), 1).await;
    let reservations = &system.reservation_client;

    // A: the only room is taken.
    let r1 = reservations
        .create_reservation(reservation("R1", "C1", "H1"))
        .await
        .expect("R1 failed");
    assert!(r1.active);
    assert_eq!(rooms_available(&system, "H1").await, 0);

    // B: a second reservation hits capacity and is not saved.
    let err = reservations
        .create_reservation(reservation("R2", "C1", "H1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert!(reservations.get("R2".into()).await.unwrap().is_none());
    assert_eq!(rooms_available(&system, "H1").await, 0);

    // C: cancel gives the room back.
    let canceled = reservations.cancel_reservation("R1".into()).await.unwrap();
    assert!(!canceled.active);
    assert!(!reservations.get("R1".into()).await.unwrap().unwrap().active);
    assert_eq!(rooms_available(&system, "H1").await, 1);

    // D: cancellation is one-shot.
    let err = reservations
        .cancel_reservation("R1".into())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(rooms_available(&system, "H1").await, 1);

    // Persisted state matches memory.
    let saved = storage.load("reservations").await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["active"], json!(false));
    assert_eq!(storage.load("hotels").await[0]["rooms_available"], json!(1));

    system.shutdown().await.unwrap();
}

/// E: unknown references fail before anything changes.
#[tokio::test]
async fn test_unknown_references_change_nothing() {
    let system = seeded_system(Arc::new(MemoryStore::new()), 2).await;
    let reservations = &system.reservation_client;

    let err = reservations
        .create_reservation(reservation("R1", "C1", "ZZZ"))
        .await
        .unwrap_err();
    assert_eq!(err, ReservationError::HotelNotFound("ZZZ".into()));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // The customer is checked first.
    let err = reservations
        .create_reservation(reservation("R1", "C9", "ZZZ"))
        .await
        .unwrap_err();
    assert_eq!(err, ReservationError::CustomerNotFound("C9".into()));

    assert!(reservations.list().await.unwrap().is_empty());
    assert_eq!(rooms_available(&system, "H1").await, 2);

    let err = reservations
        .cancel_reservation("nope".into())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_validation_and_conflicts() {
    let system = seeded_system(Arc::new(MemoryStore::new()), 2).await;

    let err = system
        .customer_client
        .create_customer(customer("C1", "Someone Else"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let err = system
        .customer_client
        .create_customer(customer("C2", "   "))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = system
        .hotel_client
        .create_hotel(hotel("H2", 0))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = system
        .reservation_client
        .create_reservation(reservation(" ", "C1", "H1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    // A duplicate reservation id is rejected before any room is taken.
    system
        .reservation_client
        .create_reservation(reservation("R1", "C1", "H1"))
        .await
        .unwrap();
    let err = system
        .reservation_client
        .create_reservation(reservation("R1", "C1", "H1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(rooms_available(&system, "H1").await, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_rename_and_delete() {
    let system = seeded_system(Arc::new(MemoryStore::new()), 1).await;
    let customers = &system.customer_client;

    let renamed = customers
        .rename_customer("C1".into(), " Ana Maria ".into())
        .await
        .unwrap();
    assert_eq!(renamed.name, "Ana Maria");

    system
        .reservation_client
        .create_reservation(reservation("R1", "C1", "H1"))
        .await
        .unwrap();

    // No cascade: the reservation outlives its customer and can still be canceled.
    customers.delete_customer("C1".into()).await.unwrap();
    assert!(customers.get("C1".into()).await.unwrap().is_none());
    let err = customers.delete_customer("C1".into()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    system
        .reservation_client
        .cancel_reservation("R1".into())
        .await
        .unwrap();
    assert_eq!(rooms_available(&system, "H1").await, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_hotel_rename_keeps_inventory() {
    let system = seeded_system(Arc::new(MemoryStore::new()), 3).await;
    system
        .reservation_client
        .create_reservation(reservation("R1", "C1", "H1"))
        .await
        .unwrap();

    let renamed = system
        .hotel_client
        .rename_hotel("H1".into(), "Grand Hotel".into())
        .await
        .unwrap();

    assert_eq!(renamed.name, "Grand Hotel");
    assert_eq!(renamed.rooms_total, 3);
    assert_eq!(renamed.rooms_available, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_never_oversell() {
    const ROOMS: u32 = 3;
    const ATTEMPTS: usize = 12;

    let system = seeded_system(Arc::new(MemoryStore::new()), ROOMS).await;

    let tasks: Vec<_> = (0..ATTEMPTS)
        .map(|i| {
            let client = system.reservation_client.clone();
            tokio::spawn(async move {
                client
                    .create_reservation(reservation(&format!("R{i}"), "C1", "H1"))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => successes += 1,
            Err(e) => assert_eq!(e.kind(), ErrorKind::Capacity),
        }
    }

    assert_eq!(successes, ROOMS as usize);
    assert_eq!(rooms_available(&system, "H1").await, 0);
    assert_eq!(
        system.reservation_client.list().await.unwrap().len(),
        ROOMS as usize
    );

    system.shutdown().await.unwrap();
}

/// F: malformed records are skipped on load.
#[tokio::test]
async fn test_malformed_records_are_skipped() {
    let storage = MemoryStore::new()
        .with_collection(
            "customers",
            vec![
                record(json!({"customer_id": "C1", "name": "Ana"})),
                record(json!({"customer_id": "C2"})),
            ],
        )
        .with_collection(
            "hotels",
            vec![
                record(json!({"hotel_id": "H1", "name": "Ok", "rooms_total": 2, "rooms_available": 2})),
                record(json!({"hotel_id": "H2", "name": "Broken", "rooms_total": 1, "rooms_available": 5})),
            ],
        )
        .with_collection(
            "reservations",
            vec![record(json!({"reservation_id": "R1", "customer_id": "C1", "hotel_id": "H1"}))],
        );
    let system = ReservationSystem::new(Arc::new(storage), 10);

    let customers = system.customer_client.list().await.unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].customer_id, "C1");

    let hotels = system.hotel_client.list().await.unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].hotel_id, "H1");

    // A record without the flag loads as active.
    let reservations = system.reservation_client.list().await.unwrap();
    assert!(reservations[0].active);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::default().with_data_dir(dir.path().join("data"));

    let system = ReservationSystem::open(&config);
    system
        .customer_client
        .create_customer(customer("C1", "Ana"))
        .await
        .unwrap();
    system.hotel_client.create_hotel(hotel("H1", 2)).await.unwrap();
    system
        .reservation_client
        .create_reservation(reservation("R1", "C1", "H1"))
        .await
        .unwrap();
    system
        .reservation_client
        .create_reservation(reservation("R2", "C1", "H1"))
        .await
        .unwrap();
    system
        .reservation_client
        .cancel_reservation("R1".into())
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    for collection in ["customers", "hotels", "reservations"] {
        assert!(config.data_dir.join(format!("{collection}.json")).exists());
    }

    let reopened = ReservationSystem::open(&config);
    assert_eq!(reopened.customer_client.list().await.unwrap().len(), 1);
    assert_eq!(rooms_available(&reopened, "H1").await, 1);

    let reservations = reopened.reservation_client.list().await.unwrap();
    let states: Vec<_> = reservations
        .iter()
        .map(|r| (r.reservation_id.as_str(), r.active))
        .collect();
    assert_eq!(states, [("R1", false), ("R2", true)]);

    let report = reopened.reconcile(false).await.unwrap();
    assert!(report.is_consistent());

    reopened.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reconcile_repairs_unreleased_room() {
    // R1 was canceled but its room never came back.
    let storage = MemoryStore::new()
        .with_collection(
            "hotels",
            vec![record(json!({"hotel_id": "H1", "name": "Grand", "rooms_total": 2, "rooms_available": 0}))],
        )
        .with_collection(
            "reservations",
            vec![
                record(json!({"reservation_id": "R1", "customer_id": "C1", "hotel_id": "H1", "active": false})),
                record(json!({"reservation_id": "R2", "customer_id": "C1", "hotel_id": "H1", "active": true})),
            ],
        );
    let system = ReservationSystem::new(Arc::new(storage), 10);

    let report = system.reconcile(false).await.unwrap();
    assert_eq!(report.hotels_checked, 1);
    assert_eq!(report.drifts.len(), 1);
    assert_eq!(report.drifts[0].recorded, 0);
    assert_eq!(report.drifts[0].expected, 1);
    assert!(report.repaired.is_empty());
    assert_eq!(rooms_available(&system, "H1").await, 0);

    let report = system.reconcile(true).await.unwrap();
    assert_eq!(report.repaired, ["H1"]);
    assert_eq!(rooms_available(&system, "H1").await, 1);

    assert!(system.reconcile(false).await.unwrap().is_consistent());

    system.shutdown().await.unwrap();
}

/// Accepts every collection except reservations.
struct RejectReservations(MemoryStore);

#[async_trait]
impl CollectionStore for RejectReservations {
    async fn load(&self, collection: &str) -> Vec<Record> {
        self.0.load(collection).await
    }

    async fn save(&self, collection: &str, records: &[Record]) -> Result<(), StorageError> {
        if collection == "reservations" {
            return Err(StorageError::Io {
                path: "reservations.json".into(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.0.save(collection, records).await
    }
}

#[tokio::test]
async fn test_failed_save_returns_the_room() {
    let system = seeded_system(Arc::new(RejectReservations(MemoryStore::new())), 1).await;

    let err = system
        .reservation_client
        .create_reservation(reservation("R1", "C1", "H1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Storage);
    assert!(system.reservation_client.list().await.unwrap().is_empty());
    assert_eq!(rooms_available(&system, "H1").await, 1);

    system.shutdown().await.unwrap();
}
