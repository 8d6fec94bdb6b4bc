use axum::{
    Router,
    routing::{get, post},
};

use crate::interface_adapters::handlers::{
    all_bookings, cancel, my_bookings, reserve, room_display, schedule, today_stats,
};
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/schedule", get(schedule))
        .route("/bookings", post(reserve).get(all_bookings))
        .route("/bookings/cancel", post(cancel))
        .route("/bookings/mine", post(my_bookings))
        .route("/rooms/display", post(room_display))
        .route("/stats/today", get(today_stats))
        .with_state(state)
}
