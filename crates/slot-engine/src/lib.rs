//! # slot-engine
//!
//! The interval algebra behind a tutoring platform's booking flow: tutors
//! publish recurring or bounded availability rules, students reserve
//! fixed-duration sub-intervals inside them, and this crate decides what is
//! free, what is bookable, and whether a proposed booking fits -- without ever
//! producing overlapping or out-of-bounds results.
//!
//! Everything here is a pure, synchronous function over caller-supplied
//! values: no I/O, no shared state, safe to call from any number of threads.
//! Persistence, auth, transport, and timezone display are the caller's
//! problem; all instants are already-normalized UTC.
//!
//! ## Modules
//!
//! - [`rule`] -- availability rules and the per-day activation predicate
//! - [`discretize`] -- rule × calendar day → one concrete UTC interval
//! - [`subtract`] -- sweep booked sub-slots out of an interval, leaving the
//!   free remainder
//! - [`split`] -- cut free time into fixed-duration bookable units
//! - [`booking`] -- the write-time feasibility check for a proposed booking
//! - [`unpack`] -- the rolling N-day view a booking page renders
//! - [`slot`] -- interval value types and containment/intersection predicates
//! - [`error`] -- error types

pub mod booking;
pub mod discretize;
pub mod error;
pub mod rule;
pub mod slot;
pub mod split;
pub mod subtract;
pub mod unpack;

pub use booking::{booking_fit, can_book, BookingRequest};
pub use discretize::discretize;
pub use error::SlotError;
pub use rule::{AvailabilityRule, Recurrence, TimeOfDayWindow};
pub use slot::{is_intersecting, is_parent, is_super_slot, OwnerId, RuleId, Slot, SubSlot};
pub use split::{split, split_batch};
pub use subtract::{subtract, subtract_batch};
pub use unpack::{unpack, unpack_free, DayAvailability, UnpackQuery};
