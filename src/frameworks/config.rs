use std::env;

use crate::domain::entities::RoomConfig;

// Runtime/server constants (not booking policy; operating hours live with
// the slot generator).

pub fn http_port() -> u16 {
    env::var("BOOKING_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3004)
}

// The deployed room catalog. Room 1 is the small room; the rest seat twelve.
pub fn room_catalog() -> Vec<RoomConfig> {
    vec![
        RoomConfig {
            id: "room1".to_string(),
            display_name: "Discussion Room 1".to_string(),
            capacity: 8,
        },
        RoomConfig {
            id: "room2".to_string(),
            display_name: "Discussion Room 2".to_string(),
            capacity: 12,
        },
        RoomConfig {
            id: "room3".to_string(),
            display_name: "Discussion Room 3".to_string(),
            capacity: 12,
        },
        RoomConfig {
            id: "room4".to_string(),
            display_name: "Discussion Room 4".to_string(),
            capacity: 12,
        },
    ]
}
