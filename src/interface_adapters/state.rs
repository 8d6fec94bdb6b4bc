use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::Mutex;

use crate::domain::entities::{DayKey, RoomConfig, Slot};
use crate::domain::ports::{Clock, DayStore};
use crate::use_cases::ledger::BookingLedger;

// Application state shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<BookingLedger>,
    pub rooms: Arc<Vec<RoomConfig>>,
    pub clock: Arc<dyn Clock>,
}

// In-memory day store adapter for the booking ledger.
#[derive(Clone, Default)]
pub struct InMemoryDayStore {
    days: Arc<Mutex<HashMap<DayKey, Vec<Slot>>>>,
}

impl InMemoryDayStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DayStore for InMemoryDayStore {
    async fn load(&self, key: &DayKey) -> Result<Option<Vec<Slot>>, String> {
        let days = self.days.lock().await;
        Ok(days.get(key).cloned())
    }

    async fn save(&self, key: &DayKey, slots: &[Slot]) -> Result<(), String> {
        let mut days = self.days.lock().await;
        days.insert(key.clone(), slots.to_vec());
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<(DayKey, Vec<Slot>)>, String> {
        let days = self.days.lock().await;
        Ok(days
            .iter()
            .map(|(key, slots)| (key.clone(), slots.clone()))
            .collect())
    }
}

// System clock adapter used by the booking workflows.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
