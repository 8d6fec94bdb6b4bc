// Authoritative per-room, per-day occupancy record with atomic commits.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::Mutex;

use crate::domain::entities::{DayKey, RoomConfig, Slot};
use crate::domain::errors::{QueryError, ReleaseError, ReserveError};
use crate::domain::ports::DayStore;
use crate::use_cases::allocate::Allocation;
use crate::use_cases::generate_slots::{CLOSING_HOUR, OPENING_HOUR, generate_slots};

// One booked slot located in the ledger, with its room context attached.
#[derive(Clone, Debug)]
pub struct BookingRecord {
    pub room_id: String,
    pub room_name: String,
    pub date: NaiveDate,
    pub slot: Slot,
}

// Occupancy summary for one calendar date across the whole catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayStats {
    pub total_slots: usize,
    pub booked_slots: usize,
    pub occupancy_percent: u32,
}

/// The single writer for slot occupancy state.
///
/// Reads merge a freshly generated grid with whatever was persisted, keyed by
/// slot id, so a booking recorded earlier in the day survives later grid
/// regeneration. Writes (`reserve`/`release`) run their full
/// load-check-store cycle under one commit lock, which is what guarantees
/// at most one winner when concurrent requests race for the same slot.
pub struct BookingLedger {
    store: Arc<dyn DayStore>,
    commit_lock: Mutex<()>,
}

impl BookingLedger {
    pub fn new(store: Arc<dyn DayStore>) -> Self {
        Self {
            store,
            commit_lock: Mutex::new(()),
        }
    }

    /// Merged view of a room's slots for a date.
    pub async fn get_day(
        &self,
        room: &RoomConfig,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<Vec<Slot>, QueryError> {
        let key = DayKey::new(room.id.clone(), date);
        let persisted = self
            .store
            .load(&key)
            .await
            .map_err(|_| QueryError::StorageFailure)?;
        Ok(merge_day(
            generate_slots(&room.id, date, now),
            persisted.unwrap_or_default(),
        ))
    }

    /// Atomically commit a validated allocation onto a slot.
    ///
    /// The slot's booked flag is re-checked against current persisted state
    /// inside the critical section; a request that validated against a stale
    /// read loses with `Conflict` instead of overwriting the winner.
    pub async fn reserve(
        &self,
        room: &RoomConfig,
        date: NaiveDate,
        slot_id: &str,
        allocation: Allocation,
        now: NaiveDateTime,
    ) -> Result<Slot, ReserveError> {
        let _guard = self.commit_lock.lock().await;

        let key = DayKey::new(room.id.clone(), date);
        let persisted = self
            .store
            .load(&key)
            .await
            .map_err(|_| ReserveError::StorageFailure)?;
        let mut day = merge_day(
            generate_slots(&room.id, date, now),
            persisted.unwrap_or_default(),
        );

        let Some(slot) = day.iter_mut().find(|slot| slot.id == slot_id) else {
            return Err(ReserveError::SlotNotFound);
        };
        if slot.is_booked {
            return Err(ReserveError::Conflict);
        }

        slot.is_booked = true;
        slot.booked_by_identity = Some(allocation.booked_by_identity);
        slot.booked_by_display_name = Some(allocation.booked_by_display_name);
        slot.is_group_booking = allocation.is_group_booking;
        slot.group_members = allocation.group_members;
        slot.occupants = allocation.occupants;
        let booked = slot.clone();

        self.store
            .save(&key, &day)
            .await
            .map_err(|_| ReserveError::StorageFailure)?;

        tracing::info!(room_id = %room.id, slot_id, "slot reserved");
        Ok(booked)
    }

    /// Cancel a booking, clearing every booking field on the slot.
    pub async fn release(
        &self,
        room_id: &str,
        date: NaiveDate,
        slot_id: &str,
        acting_identity: &str,
        is_privileged: bool,
    ) -> Result<(), ReleaseError> {
        let _guard = self.commit_lock.lock().await;

        let key = DayKey::new(room_id, date);
        let Some(mut day) = self
            .store
            .load(&key)
            .await
            .map_err(|_| ReleaseError::StorageFailure)?
        else {
            return Err(ReleaseError::NotFound);
        };

        let Some(slot) = day.iter_mut().find(|slot| slot.id == slot_id) else {
            return Err(ReleaseError::NotFound);
        };
        if !slot.is_booked {
            return Err(ReleaseError::NotFound);
        }
        if !is_privileged && slot.booked_by_identity.as_deref() != Some(acting_identity) {
            return Err(ReleaseError::Forbidden);
        }

        slot.clear_booking();

        self.store
            .save(&key, &day)
            .await
            .map_err(|_| ReleaseError::StorageFailure)?;

        tracing::info!(room_id, slot_id, "booking released");
        Ok(())
    }

    /// All booked slots recorded for one identity, most recent date first,
    /// earliest start time first within a date.
    pub async fn bookings_for_identity(
        &self,
        rooms: &[RoomConfig],
        identity: &str,
    ) -> Result<Vec<BookingRecord>, QueryError> {
        let mut records = self.collect_bookings(rooms).await?;
        records.retain(|record| record.slot.booked_by_identity.as_deref() == Some(identity));
        records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.slot.start_time.cmp(&b.slot.start_time))
        });
        Ok(records)
    }

    /// Every booked slot in the ledger, for the administrative listing.
    /// Most recent date first, then room name, then start time.
    pub async fn all_bookings(
        &self,
        rooms: &[RoomConfig],
    ) -> Result<Vec<BookingRecord>, QueryError> {
        let mut records = self.collect_bookings(rooms).await?;
        records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.room_name.cmp(&b.room_name))
                .then_with(|| a.slot.start_time.cmp(&b.slot.start_time))
        });
        Ok(records)
    }

    /// Occupancy for a date: booked slots against the full-day grid.
    ///
    /// The denominator deliberately ignores the current time; it is the
    /// whole operating window for every room in the catalog.
    pub async fn day_stats(
        &self,
        rooms: &[RoomConfig],
        date: NaiveDate,
    ) -> Result<DayStats, QueryError> {
        let total_slots = rooms.len() * (CLOSING_HOUR - OPENING_HOUR) as usize;

        let mut booked_slots = 0;
        for room in rooms {
            let key = DayKey::new(room.id.clone(), date);
            if let Some(slots) = self
                .store
                .load(&key)
                .await
                .map_err(|_| QueryError::StorageFailure)?
            {
                booked_slots += slots.iter().filter(|slot| slot.is_booked).count();
            }
        }

        let occupancy_percent = if total_slots > 0 {
            ((booked_slots as f64 / total_slots as f64) * 100.0).round() as u32
        } else {
            0
        };

        Ok(DayStats {
            total_slots,
            booked_slots,
            occupancy_percent,
        })
    }

    async fn collect_bookings(
        &self,
        rooms: &[RoomConfig],
    ) -> Result<Vec<BookingRecord>, QueryError> {
        let days = self
            .store
            .scan()
            .await
            .map_err(|_| QueryError::StorageFailure)?;

        let mut records = Vec::new();
        for (key, slots) in days {
            let room_name = rooms
                .iter()
                .find(|room| room.id == key.room_id)
                .map(|room| room.display_name.clone())
                .unwrap_or_else(|| key.room_id.clone());
            for slot in slots.into_iter().filter(|slot| slot.is_booked) {
                records.push(BookingRecord {
                    room_id: key.room_id.clone(),
                    room_name: room_name.clone(),
                    date: key.date,
                    slot,
                });
            }
        }
        Ok(records)
    }
}

// Overlay persisted booked slots onto a fresh grid, keyed by slot id.
//
// A booked hour that already fell out of the regenerated grid is kept;
// stale unbooked slots are dropped with the grid that produced them.
fn merge_day(fresh: Vec<Slot>, persisted: Vec<Slot>) -> Vec<Slot> {
    let mut merged = fresh;
    for stored in persisted {
        if !stored.is_booked {
            continue;
        }
        match merged.iter_mut().find(|slot| slot.id == stored.id) {
            Some(slot) => *slot = stored,
            None => merged.push(stored),
        }
    }
    merged.sort_by_key(|slot| slot.start_time);
    merged
}
