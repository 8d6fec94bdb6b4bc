use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveTime;

use crate::domain::entities::{GroupMember, RoomConfig};
use crate::domain::errors::{AllocationError, QueryError, ReleaseError, ReserveError};
use crate::interface_adapters::protocol::{
    BookingView, BookingsResponse, CancelRequest, CancelResponse, DisplayRequest, DisplayResponse,
    ErrorResponse, MyBookingsRequest, ReserveRequest, ReserveResponse, RoomSchedule,
    ScheduleResponse, SeatViewDto, StatsResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::allocate::allocate;
use crate::use_cases::display_slot::{assemble_seat_view, resolve_display_slot};
use crate::use_cases::ledger::BookingRecord;

type HandlerError = (StatusCode, Json<ErrorResponse>);

// Handler for the day schedule: every room with its merged slot grid.
pub async fn schedule(State(state): State<AppState>) -> Result<Json<ScheduleResponse>, HandlerError> {
    let now = state.clock.now();
    let date = now.date();

    let mut rooms = Vec::with_capacity(state.rooms.len());
    for room in state.rooms.iter() {
        let slots = state
            .ledger
            .get_day(room, date, now)
            .await
            .map_err(map_query_error)?;
        rooms.push(RoomSchedule {
            id: room.id.clone(),
            display_name: room.display_name.clone(),
            capacity: room.capacity,
            slots,
        });
    }

    Ok(Json(ScheduleResponse { date, rooms }))
}

// Handler for reserving a slot.
//
// Two phases: seat allocation validates against the current merged view
// without holding any lock, then the ledger commit re-checks the slot and
// turns lost races into a conflict.
pub async fn reserve(
    State(state): State<AppState>,
    Json(payload): Json<ReserveRequest>,
) -> Result<(StatusCode, Json<ReserveResponse>), HandlerError> {
    validate_reserve_payload(&payload)?;
    let room = find_room(&state, &payload.room_id)?.clone();

    // Bookings are only accepted for the current day, so the target date
    // comes from the injected clock rather than the payload.
    let now = state.clock.now();
    let date = now.date();

    let day = state
        .ledger
        .get_day(&room, date, now)
        .await
        .map_err(map_query_error)?;
    let slot = day
        .iter()
        .find(|slot| slot.id == payload.slot_id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "slot not found"))?;

    let allocation = allocate(
        &room,
        slot,
        &payload.identity,
        &payload.display_name,
        payload.group_members.clone(),
    )
    .map_err(map_allocation_error)?;

    let booked = state
        .ledger
        .reserve(&room, date, &payload.slot_id, allocation, now)
        .await
        .map_err(map_reserve_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ReserveResponse {
            date,
            room_id: room.id,
            slot: booked,
        }),
    ))
}

// Handler for cancelling a booking.
pub async fn cancel(
    State(state): State<AppState>,
    Json(payload): Json<CancelRequest>,
) -> Result<Json<CancelResponse>, HandlerError> {
    if payload.identity.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "identity is required"));
    }

    state
        .ledger
        .release(
            &payload.room_id,
            payload.date,
            &payload.slot_id,
            &payload.identity,
            payload.privileged,
        )
        .await
        .map_err(map_release_error)?;

    Ok(Json(CancelResponse { released: true }))
}

// Handler for the per-user booking listing.
pub async fn my_bookings(
    State(state): State<AppState>,
    Json(payload): Json<MyBookingsRequest>,
) -> Result<Json<BookingsResponse>, HandlerError> {
    if payload.identity.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "identity is required"));
    }

    let records = state
        .ledger
        .bookings_for_identity(&state.rooms, &payload.identity)
        .await
        .map_err(map_query_error)?;

    Ok(Json(BookingsResponse {
        bookings: records.into_iter().map(booking_view).collect(),
    }))
}

// Handler for the administrative listing of all bookings.
pub async fn all_bookings(
    State(state): State<AppState>,
) -> Result<Json<BookingsResponse>, HandlerError> {
    let records = state
        .ledger
        .all_bookings(&state.rooms)
        .await
        .map_err(map_query_error)?;

    Ok(Json(BookingsResponse {
        bookings: records.into_iter().map(booking_view).collect(),
    }))
}

// Handler for resolving a room's current seat display.
pub async fn room_display(
    State(state): State<AppState>,
    Json(payload): Json<DisplayRequest>,
) -> Result<Json<DisplayResponse>, HandlerError> {
    let room = find_room(&state, &payload.room_id)?.clone();
    let now = state.clock.now();

    let day = state
        .ledger
        .get_day(&room, now.date(), now)
        .await
        .map_err(map_query_error)?;
    let display = resolve_display_slot(&day, now);
    let seats = assemble_seat_view(display)
        .into_iter()
        .map(|seat| SeatViewDto {
            seat_id: seat.seat_id,
            occupant: seat.occupant,
        })
        .collect();

    Ok(Json(DisplayResponse {
        slot: display.cloned(),
        seats,
    }))
}

// Handler for today's occupancy stats.
pub async fn today_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, HandlerError> {
    let date = state.clock.now().date();
    let stats = state
        .ledger
        .day_stats(&state.rooms, date)
        .await
        .map_err(map_query_error)?;

    Ok(Json(StatsResponse {
        date,
        total_slots: stats.total_slots,
        booked_slots: stats.booked_slots,
        occupancy_percent: stats.occupancy_percent,
    }))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn find_room<'a>(state: &'a AppState, room_id: &str) -> Result<&'a RoomConfig, HandlerError> {
    state
        .rooms
        .iter()
        .find(|room| room.id == room_id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "room not found"))
}

// Validate reserve payload fields before touching the ledger.
fn validate_reserve_payload(payload: &ReserveRequest) -> Result<(), HandlerError> {
    if payload.identity.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "identity is required"));
    }
    if payload.display_name.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "display_name is required",
        ));
    }
    for member in &payload.group_members {
        validate_group_member(member)?;
    }
    Ok(())
}

fn validate_group_member(member: &GroupMember) -> Result<(), HandlerError> {
    if member.name.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "group member name is required",
        ));
    }
    let valid_email = matches!(
        member.contact_email.split_once('@'),
        Some((local, domain)) if !local.is_empty() && domain.contains('.')
    );
    if !valid_email {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid group member email",
        ));
    }
    Ok(())
}

fn booking_view(record: BookingRecord) -> BookingView {
    BookingView {
        date: record.date,
        room_id: record.room_id,
        room_name: record.room_name,
        slot_id: record.slot.id.clone(),
        start_time: display_time(record.slot.start_time),
        end_time: display_time(record.slot.end_time),
        booked_by_identity: record.slot.booked_by_identity.clone(),
        booked_by_display_name: record.slot.booked_by_display_name.clone(),
        is_group_booking: record.slot.is_group_booking,
        group_members: record.slot.group_members,
        occupants: record.slot.occupants,
    }
}

// 24-hour storage format, 12-hour presentation format.
fn display_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

fn map_allocation_error(err: AllocationError) -> HandlerError {
    match err {
        AllocationError::SlotAlreadyBooked => {
            error_response(StatusCode::CONFLICT, "slot is already booked")
        }
        AllocationError::CapacityExceeded => {
            error_response(StatusCode::BAD_REQUEST, "room capacity exceeded")
        }
    }
}

fn map_reserve_error(err: ReserveError) -> HandlerError {
    match err {
        ReserveError::Conflict => error_response(
            StatusCode::CONFLICT,
            "slot was booked by someone else just now",
        ),
        ReserveError::SlotNotFound => error_response(StatusCode::NOT_FOUND, "slot not found"),
        ReserveError::StorageFailure => error_response(StatusCode::BAD_GATEWAY, "storage error"),
    }
}

fn map_release_error(err: ReleaseError) -> HandlerError {
    match err {
        ReleaseError::NotFound => error_response(StatusCode::NOT_FOUND, "booking not found"),
        ReleaseError::Forbidden => error_response(
            StatusCode::FORBIDDEN,
            "not authorized to cancel this booking",
        ),
        ReleaseError::StorageFailure => error_response(StatusCode::BAD_GATEWAY, "storage error"),
    }
}

fn map_query_error(err: QueryError) -> HandlerError {
    match err {
        QueryError::StorageFailure => error_response(StatusCode::BAD_GATEWAY, "storage error"),
    }
}
