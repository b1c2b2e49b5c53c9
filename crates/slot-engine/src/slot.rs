//! Interval value types and the predicates the rest of the algebra is built on.
//!
//! Two shapes cover everything: a [`Slot`] is one concrete realization of an
//! availability rule on a specific day, and a [`SubSlot`] is any span living
//! inside one -- a committed booking, a free remainder after subtraction, or a
//! fixed-duration bookable unit. All instants are absolute UTC; callers own
//! any user-local display conversion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of an availability rule (the durable entity owned by storage).
pub type RuleId = i64;

/// Identifier of the user who owns a rule.
pub type OwnerId = i64;

/// A concrete interval: one availability rule realized on one calendar day.
///
/// Invariant: `start < end`. Zero-length slots are never constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// The rule this interval was realized from.
    pub id: RuleId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A span inside some rule's concrete interval, keyed by the parent rule id.
///
/// Booked reservations, free remainders, and bookable units all share this
/// shape; they are transient values recomputed on every query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSlot {
    pub parent: RuleId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Anything with absolute start/end instants. Lets the containment and
/// intersection predicates work across [`Slot`] and [`SubSlot`] uniformly.
pub trait Span {
    fn span_start(&self) -> DateTime<Utc>;
    fn span_end(&self) -> DateTime<Utc>;
}

impl Span for Slot {
    fn span_start(&self) -> DateTime<Utc> {
        self.start
    }
    fn span_end(&self) -> DateTime<Utc> {
        self.end
    }
}

impl Span for SubSlot {
    fn span_start(&self) -> DateTime<Utc> {
        self.start
    }
    fn span_end(&self) -> DateTime<Utc> {
        self.end
    }
}

impl Slot {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl SubSlot {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// `a` fully contains `b`: `a.start <= b.start && a.end >= b.end`.
pub fn is_super_slot<A: Span, B: Span>(a: &A, b: &B) -> bool {
    a.span_start() <= b.span_start() && a.span_end() >= b.span_end()
}

/// Does `target` overlap at least one span in `others`?
///
/// Touching endpoints do NOT count: a span ending exactly when another starts
/// is adjacent, not overlapping. Back-to-back bookings depend on this.
pub fn is_intersecting<A: Span, B: Span>(target: &A, others: &[B]) -> bool {
    others.iter().any(|other| {
        let starts_after = target.span_start() >= other.span_end();
        let ends_before = target.span_end() <= other.span_start();
        !starts_after && !ends_before
    })
}

/// Is `slot` the parent of `sub`? Requires both the id to match and `sub` to
/// actually be contained -- an id match without containment is a data error
/// the caller must surface, never a parent relationship.
pub fn is_parent(slot: &Slot, sub: &SubSlot) -> bool {
    slot.id == sub.parent && is_super_slot(slot, sub)
}

/// Immutably sort sub-slots ascending by start (then end, for stability).
pub fn order_sub_slots(slots: &[SubSlot]) -> Vec<SubSlot> {
    let mut sorted = slots.to_vec();
    sorted.sort_by_key(|s| (s.start, s.end));
    sorted
}
