// Domain-level errors for booking workflows.

// Pre-commit allocation failures. Both are recoverable by the caller
// (pick another slot, or shrink the party).
#[derive(Debug)]
pub enum AllocationError {
    SlotAlreadyBooked,
    CapacityExceeded,
}

// Failures while committing a reservation.
#[derive(Debug)]
pub enum ReserveError {
    // The slot transitioned to booked between validation and commit.
    Conflict,
    SlotNotFound,
    StorageFailure,
}

// Failures while cancelling a booking.
#[derive(Debug)]
pub enum ReleaseError {
    NotFound,
    // Unprivileged actors may only cancel their own bookings.
    Forbidden,
    StorageFailure,
}

// Failures on read-only ledger queries.
#[derive(Debug)]
pub enum QueryError {
    StorageFailure,
}
