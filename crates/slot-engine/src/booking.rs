//! Booking feasibility -- the write-time gate for new reservations.
//!
//! A request is feasible iff, after subtracting the existing bookings, some
//! free sub-slot fully contains it. An exact fit counts, and so does a
//! request starting exactly where another booking ends -- adjacency is not a
//! conflict. Infeasibility is the expected negative result ("slot no longer
//! available"), never an error.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::slot::{is_super_slot, Slot, SubSlot};
use crate::subtract::subtract;

/// A proposed reservation: where it starts and how long it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub start: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl BookingRequest {
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(self.duration_minutes)
    }
}

/// The free sub-slot that fully contains `request`, if any.
///
/// This is [`can_book`] with diagnostics: callers rendering a rejection can
/// show which free span came closest, and callers committing a booking get
/// the span it lands in.
///
/// # Errors
/// `SlotError::InvalidDuration` when the requested duration is not positive;
/// `SlotError::Integrity` when the existing bookings are corrupt (propagated
/// from the subtraction).
pub fn booking_fit(
    parent: &Slot,
    booked: &[SubSlot],
    request: &BookingRequest,
) -> Result<Option<SubSlot>> {
    if request.duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(request.duration_minutes));
    }

    let requested = SubSlot {
        parent: parent.id,
        start: request.start,
        end: request.end(),
    };

    let free = subtract(parent, booked)?;
    Ok(free.into_iter().find(|f| is_super_slot(f, &requested)))
}

/// Can `request` be booked against `parent` given the existing bookings?
///
/// This is the single predicate the storage layer must re-check, against a
/// freshly read booking set, inside the same transaction that commits the
/// new booking.
pub fn can_book(parent: &Slot, booked: &[SubSlot], request: &BookingRequest) -> Result<bool> {
    Ok(booking_fit(parent, booked, request)?.is_some())
}
