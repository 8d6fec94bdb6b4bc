use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::entities::{DayKey, RoomConfig, Slot};
use crate::domain::ports::{Clock, DayStore};
use crate::use_cases::generate_slots::slot_id;

pub(crate) type DayTable = Arc<Mutex<HashMap<DayKey, Vec<Slot>>>>;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub(crate) fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 16).expect("valid date")
}

pub(crate) fn test_time(hour: u32, minute: u32) -> NaiveDateTime {
    test_date()
        .and_hms_opt(hour, minute, 0)
        .expect("valid time of day")
}

pub(crate) fn room(id: &str, display_name: &str, capacity: u32) -> RoomConfig {
    RoomConfig {
        id: id.to_string(),
        display_name: display_name.to_string(),
        capacity,
    }
}

// Fresh unbooked slot for an hour on the shared test date.
pub(crate) fn unbooked_slot(room_id: &str, hour: u32) -> Slot {
    let start = test_date()
        .and_hms_opt(hour, 0, 0)
        .expect("valid time of day")
        .time();
    let end = test_date()
        .and_hms_opt(hour + 1, 0, 0)
        .expect("valid time of day")
        .time();
    Slot::shell(slot_id(room_id, test_date(), hour), start, end)
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub load: bool,
    pub save: bool,
    pub scan: bool,
}

// In-memory day store that tests can seed, inspect, and break on demand.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    days: DayTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            days: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_day(&self, key: DayKey, slots: Vec<Slot>) {
        let mut guard = self.days.lock().expect("days mutex poisoned");
        guard.insert(key, slots);
    }

    pub(crate) fn get_test_day(&self, key: &DayKey) -> Option<Vec<Slot>> {
        let guard = self.days.lock().expect("days mutex poisoned");
        guard.get(key).cloned()
    }
}

#[async_trait]
impl DayStore for RecordingStore {
    async fn load(&self, key: &DayKey) -> Result<Option<Vec<Slot>>, String> {
        if self.failures.load {
            return Err("load failed".to_string());
        }
        let guard = self.days.lock().expect("days mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    async fn save(&self, key: &DayKey, slots: &[Slot]) -> Result<(), String> {
        if self.failures.save {
            return Err("save failed".to_string());
        }
        let mut guard = self.days.lock().expect("days mutex poisoned");
        guard.insert(key.clone(), slots.to_vec());
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<(DayKey, Vec<Slot>)>, String> {
        if self.failures.scan {
            return Err("scan failed".to_string());
        }
        let guard = self.days.lock().expect("days mutex poisoned");
        Ok(guard
            .iter()
            .map(|(key, slots)| (key.clone(), slots.clone()))
            .collect())
    }
}
