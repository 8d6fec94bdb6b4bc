use crate::domain::entities::{GroupMember, Occupant, RoomConfig, SEAT_LAYOUT, Slot};
use crate::domain::errors::AllocationError;

// Outcome of a successful allocation, ready for an atomic ledger commit.
#[derive(Clone, Debug)]
pub struct Allocation {
    pub booked_by_identity: String,
    pub booked_by_display_name: String,
    pub is_group_booking: bool,
    pub group_members: Vec<GroupMember>,
    pub occupants: Vec<Occupant>,
}

// Validate a booking request against the room and assign visual seats.
//
// Pure function by design: the ledger re-checks slot state when committing,
// so this can run against a possibly-stale read without holding any lock.
// Checks run in order; the first failure wins.
pub fn allocate(
    room: &RoomConfig,
    slot: &Slot,
    identity: &str,
    display_name: &str,
    group_members: Vec<GroupMember>,
) -> Result<Allocation, AllocationError> {
    if slot.is_booked {
        return Err(AllocationError::SlotAlreadyBooked);
    }

    // Capacity counts the primary booker.
    let party_size = 1 + group_members.len();
    if party_size > room.capacity as usize {
        return Err(AllocationError::CapacityExceeded);
    }

    // The booker always takes the first seat; members follow in the order
    // supplied. A party larger than the layout keeps its extra members
    // (they count toward capacity) but they get no visual seat.
    let mut occupants = Vec::with_capacity(party_size.min(SEAT_LAYOUT.len()));
    occupants.push(Occupant {
        seat_id: SEAT_LAYOUT[0].to_string(),
        display_name: display_name.to_string(),
        is_primary_booker: true,
    });
    for (member, seat_id) in group_members.iter().zip(SEAT_LAYOUT.iter().skip(1)) {
        occupants.push(Occupant {
            seat_id: (*seat_id).to_string(),
            display_name: member.name.clone(),
            is_primary_booker: false,
        });
    }

    Ok(Allocation {
        booked_by_identity: identity.to_string(),
        booked_by_display_name: display_name.to_string(),
        is_group_booking: !group_members.is_empty(),
        group_members,
        occupants,
    })
}
