use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{GroupMember, Occupant, Slot};

// One room with its merged slot grid for the day.
#[derive(Debug, Serialize)]
pub struct RoomSchedule {
    pub id: String,
    pub display_name: String,
    pub capacity: u32,
    pub slots: Vec<Slot>,
}

// Response payload for the day schedule.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub date: NaiveDate,
    pub rooms: Vec<RoomSchedule>,
}

// Request payload for reserving a slot.
#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    pub room_id: String,
    pub slot_id: String,
    pub identity: String,
    pub display_name: String,
    #[serde(default)]
    pub group_members: Vec<GroupMember>,
}

// Response payload for a committed reservation.
#[derive(Debug, Serialize)]
pub struct ReserveResponse {
    pub date: NaiveDate,
    pub room_id: String,
    pub slot: Slot,
}

// Request payload for cancelling a booking. The identity and privileged
// flag come from the authenticating front layer, not from this service.
#[derive(Debug, Deserialize)]
pub struct CancelRequest {
    pub room_id: String,
    pub date: NaiveDate,
    pub slot_id: String,
    pub identity: String,
    #[serde(default)]
    pub privileged: bool,
}

// Response payload for a cancellation.
#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub released: bool,
}

// Request payload for the per-user booking listing.
#[derive(Debug, Deserialize)]
pub struct MyBookingsRequest {
    pub identity: String,
}

// One row in a booking listing; times are preformatted for display.
#[derive(Debug, Serialize)]
pub struct BookingView {
    pub date: NaiveDate,
    pub room_id: String,
    pub room_name: String,
    pub slot_id: String,
    pub start_time: String,
    pub end_time: String,
    pub booked_by_identity: Option<String>,
    pub booked_by_display_name: Option<String>,
    pub is_group_booking: bool,
    pub group_members: Vec<GroupMember>,
    pub occupants: Vec<Occupant>,
}

// Response payload for booking listings.
#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<BookingView>,
}

// Request payload for resolving a room's display slot.
#[derive(Debug, Deserialize)]
pub struct DisplayRequest {
    pub room_id: String,
}

// One position in the ten-seat visual template.
#[derive(Debug, Serialize)]
pub struct SeatViewDto {
    pub seat_id: String,
    pub occupant: Option<Occupant>,
}

// Response payload for the seat display view.
#[derive(Debug, Serialize)]
pub struct DisplayResponse {
    pub slot: Option<Slot>,
    pub seats: Vec<SeatViewDto>,
}

// Response payload for the daily occupancy stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub date: NaiveDate,
    pub total_slots: usize,
    pub booked_slots: usize,
    pub occupancy_percent: u32,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
