//! # Inventory Reconciliation
//!
//! A hotel's `rooms_available` should always equal `rooms_total` minus its active
//! reservations. A cancellation whose room release failed leaves the hotel short by one
//! room; this pass finds such drift and, on request, repairs it.
//!
//! Repairs go through [`HotelClient::reserve_room`] and [`HotelClient::release_room`] one
//! room at a time, so the inventory bound keeps a single gate on each side. A hotel with
//! more active reservations than rooms is reported as oversold and left alone.
//!
//! Run it while nothing else writes (at startup or during maintenance).

use super::SystemError;
use crate::clients::{ActorClient, HotelClient, ReservationClient};
use crate::model::{Hotel, Reservation};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

/// A hotel whose recorded availability disagrees with its active reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryDrift {
    pub hotel_id: String,
    /// `rooms_available` as stored.
    pub recorded: u32,
    /// `rooms_total` minus active reservations. Negative when oversold.
    pub expected: i64,
    pub oversold: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub hotels_checked: usize,
    pub drifts: Vec<InventoryDrift>,
    /// Hotels whose availability was corrected.
    pub repaired: Vec<String>,
}

impl ReconcileReport {
    pub fn is_consistent(&self) -> bool {
        self.drifts.is_empty()
    }
}

/// Compares every hotel with the active reservations pointing at it.
///
/// Reservations for unknown hotels are ignored.
pub fn find_drift(hotels: &[Hotel], reservations: &[Reservation]) -> Vec<InventoryDrift> {
    let mut active: HashMap<&str, i64> = HashMap::new();
    for reservation in reservations.iter().filter(|r| r.active) {
        *active.entry(reservation.hotel_id.as_str()).or_default() += 1;
    }

    hotels
        .iter()
        .filter_map(|hotel| {
            let held = active.get(hotel.hotel_id.as_str()).copied().unwrap_or(0);
            let expected = i64::from(hotel.rooms_total) - held;
            (expected != i64::from(hotel.rooms_available)).then(|| InventoryDrift {
                hotel_id: hotel.hotel_id.clone(),
                recorded: hotel.rooms_available,
                expected,
                oversold: expected < 0,
            })
        })
        .collect()
}

pub(crate) async fn reconcile(
    hotels: &HotelClient,
    reservations: &ReservationClient,
    repair: bool,
) -> Result<ReconcileReport, SystemError> {
    let all_hotels = hotels.list().await?;
    let all_reservations = reservations.list().await?;

    let mut report = ReconcileReport {
        hotels_checked: all_hotels.len(),
        drifts: find_drift(&all_hotels, &all_reservations),
        repaired: Vec::new(),
    };

    for drift in &report.drifts {
        warn!(hotel_id = %drift.hotel_id, recorded = drift.recorded, expected = drift.expected, oversold = drift.oversold, "Inventory drift");
        if !repair || drift.oversold {
            continue;
        }

        let expected = u32::try_from(drift.expected).unwrap_or(0);
        if drift.recorded > expected {
            for _ in expected..drift.recorded {
                hotels.reserve_room(drift.hotel_id.clone()).await?;
            }
        } else {
            for _ in drift.recorded..expected {
                hotels.release_room(drift.hotel_id.clone()).await?;
            }
        }
        info!(hotel_id = %drift.hotel_id, rooms_available = expected, "Inventory repaired");
        report.repaired.push(drift.hotel_id.clone());
    }

    Ok(report)
}
