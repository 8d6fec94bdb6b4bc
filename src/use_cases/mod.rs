// Use cases layer: the allocation engine's application workflows.

pub mod allocate;
pub mod display_slot;
pub mod generate_slots;
pub mod ledger;

#[cfg(test)]
pub(crate) mod test_support;

pub use allocate::{Allocation, allocate};
pub use display_slot::{SeatView, assemble_seat_view, resolve_display_slot};
pub use generate_slots::{CLOSING_HOUR, OPENING_HOUR, generate_slots, slot_id};
pub use ledger::{BookingLedger, BookingRecord, DayStats};
