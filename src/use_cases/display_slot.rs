use chrono::NaiveDateTime;

use crate::domain::entities::{Occupant, SEAT_LAYOUT, Slot};

// One position in the ten-seat visual template, occupied or free.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatView {
    pub seat_id: String,
    pub occupant: Option<Occupant>,
}

// Pick which booked slot should drive the seat display right now.
//
// A slot containing the current moment wins outright; otherwise the
// soonest upcoming booked slot is shown; otherwise the room renders empty.
pub fn resolve_display_slot(slots: &[Slot], now: NaiveDateTime) -> Option<&Slot> {
    let time = now.time();

    if let Some(active) = slots
        .iter()
        .find(|slot| slot.is_booked && slot.start_time <= time && time < slot.end_time)
    {
        return Some(active);
    }

    slots
        .iter()
        .filter(|slot| slot.is_booked && slot.start_time > time)
        .min_by_key(|slot| slot.start_time)
}

// Expand a display slot into the full ten-seat summary, one entry per
// layout position in S1..S10 order.
pub fn assemble_seat_view(slot: Option<&Slot>) -> Vec<SeatView> {
    SEAT_LAYOUT
        .iter()
        .map(|seat_id| SeatView {
            seat_id: (*seat_id).to_string(),
            occupant: slot.and_then(|slot| {
                slot.occupants
                    .iter()
                    .find(|occupant| occupant.seat_id == *seat_id)
                    .cloned()
            }),
        })
        .collect()
}
