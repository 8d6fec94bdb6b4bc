use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::entities::{DayKey, Slot};

// Port for per-day slot persistence used by the booking ledger.
//
// The ledger is the only writer; adapters just need to store and return the
// slot set for a key, plus enumerate everything for listing queries.
#[async_trait]
pub trait DayStore: Send + Sync {
    async fn load(&self, key: &DayKey) -> Result<Option<Vec<Slot>>, String>;
    async fn save(&self, key: &DayKey, slots: &[Slot]) -> Result<(), String>;
    async fn scan(&self) -> Result<Vec<(DayKey, Vec<Slot>)>, String>;
}

// Port for retrieving the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
