use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// The fixed visual seating template. Every room renders these ten positions
// regardless of its logical capacity; extra occupants simply get no seat.
pub const SEAT_LAYOUT: [&str; 10] = [
    "S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9", "S10",
];

// A person added to a booking besides the primary booker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub name: String,
    pub contact_email: String,
}

// One seat assignment inside a booked slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Occupant {
    pub seat_id: String,
    pub display_name: String,
    pub is_primary_booker: bool,
}

// A one-hour bookable window for one room on one date.
//
// Unbooked slots carry no booker, members, or occupants; a booked slot has
// exactly one occupant per party member that fits the visual layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_booked: bool,
    pub booked_by_identity: Option<String>,
    pub booked_by_display_name: Option<String>,
    pub is_group_booking: bool,
    pub group_members: Vec<GroupMember>,
    pub occupants: Vec<Occupant>,
}

impl Slot {
    // Fresh unbooked shell for the given window.
    pub fn shell(id: String, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            id,
            start_time,
            end_time,
            is_booked: false,
            booked_by_identity: None,
            booked_by_display_name: None,
            is_group_booking: false,
            group_members: Vec::new(),
            occupants: Vec::new(),
        }
    }

    // Reset all booking fields back to the unbooked state.
    pub fn clear_booking(&mut self) {
        self.is_booked = false;
        self.booked_by_identity = None;
        self.booked_by_display_name = None;
        self.is_group_booking = false;
        self.group_members.clear();
        self.occupants.clear();
    }
}

// Static description of a bookable room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub id: String,
    pub display_name: String,
    pub capacity: u32,
}

// Storage key for one room's slot set on one calendar date.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DayKey {
    pub room_id: String,
    pub date: NaiveDate,
}

impl DayKey {
    pub fn new(room_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            room_id: room_id.into(),
            date,
        }
    }
}
