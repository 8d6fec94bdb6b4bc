use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::domain::entities::Slot;

// Operating window shared by every room: hourly slots, end-exclusive.
pub const OPENING_HOUR: u32 = 8;
pub const CLOSING_HOUR: u32 = 20;

// Deterministic slot id shared by generation and ledger merge lookups.
pub fn slot_id(room_id: &str, date: NaiveDate, hour: u32) -> String {
    format!("slot-{}-{}-{:02}", room_id, date.format("%Y-%m-%d"), hour)
}

fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("hour within the operating day")
}

// Generate the bookable slot shells for a room on a date.
//
// Booking is restricted to the current calendar day, and an already-started
// hour is no longer bookable unless the clock sits exactly on the hour.
pub fn generate_slots(room_id: &str, date: NaiveDate, now: NaiveDateTime) -> Vec<Slot> {
    if date != now.date() {
        return Vec::new();
    }
    if now.hour() >= CLOSING_HOUR {
        return Vec::new();
    }

    let mut first_hour = OPENING_HOUR;
    if now.hour() >= OPENING_HOUR {
        first_hour = if now.minute() > 0 {
            now.hour() + 1
        } else {
            now.hour()
        };
    }
    let first_hour = first_hour.max(OPENING_HOUR);

    (first_hour..CLOSING_HOUR)
        .map(|hour| {
            Slot::shell(
                slot_id(room_id, date, hour),
                on_the_hour(hour),
                on_the_hour(hour + 1),
            )
        })
        .collect()
}
