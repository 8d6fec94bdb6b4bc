// Domain layer: booking entities, ports, and error contracts.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{DayKey, GroupMember, Occupant, RoomConfig, SEAT_LAYOUT, Slot};
