//! Conflict subtraction -- remove booked sub-slots from a concrete interval.
//!
//! A single-pass sweep, not a general interval-tree operation: booked
//! sub-slots are pairwise non-overlapping and fully contained in their parent
//! (the feasibility check enforces both at write time), so sorting by start
//! and walking a cursor is sufficient. Violations of either assumption mean a
//! committed booking upstream is corrupt, and the sweep aborts loudly instead
//! of clipping the bad data into something plausible.

use crate::error::{Result, SlotError};
use crate::slot::{is_parent, order_sub_slots, Slot, SubSlot};

/// Subtract `booked` from `parent`, returning the free remainder.
///
/// Output sub-slots are non-overlapping, ascending by start, and each fully
/// contained in `parent`. The input order of `booked` does not matter -- it is
/// sorted internally.
///
/// # Errors
/// `SlotError::Integrity` when a booked sub-slot claims a different parent or
/// escapes the parent's bounds, when two booked sub-slots share a start, or
/// when two booked sub-slots overlap.
pub fn subtract(parent: &Slot, booked: &[SubSlot]) -> Result<Vec<SubSlot>> {
    for b in booked {
        if !is_parent(parent, b) {
            return Err(SlotError::Integrity {
                rule: parent.id,
                reason: format!(
                    "booked sub-slot [{}, {}) of rule {} is not contained in its parent [{}, {})",
                    b.start, b.end, b.parent, parent.start, parent.end
                ),
            });
        }
    }

    let sorted = order_sub_slots(booked);
    for pair in sorted.windows(2) {
        if pair[0].start == pair[1].start {
            return Err(SlotError::Integrity {
                rule: parent.id,
                reason: format!("two booked sub-slots share the start {}", pair[0].start),
            });
        }
        if pair[1].start < pair[0].end {
            return Err(SlotError::Integrity {
                rule: parent.id,
                reason: format!(
                    "booked sub-slots [{}, {}) and [{}, {}) overlap",
                    pair[0].start, pair[0].end, pair[1].start, pair[1].end
                ),
            });
        }
    }

    // Sweep: the gap before each booking is free, then everything after the
    // last one. Empty gaps (cursor == b.start) are skipped.
    let mut free = Vec::new();
    let mut cursor = parent.start;
    for b in &sorted {
        if cursor < b.start {
            free.push(SubSlot {
                parent: parent.id,
                start: cursor,
                end: b.start,
            });
        }
        cursor = b.end;
    }
    if cursor < parent.end {
        free.push(SubSlot {
            parent: parent.id,
            start: cursor,
            end: parent.end,
        });
    }

    Ok(free)
}

/// Subtract a mixed batch of bookings from many parents.
///
/// Each booking is routed to its parent by id, then [`subtract`] runs per
/// parent; the containment check there catches bookings whose id matches a
/// parent they do not actually fit inside. Output preserves the order of
/// `parents`, with each parent's remainder ascending.
pub fn subtract_batch(parents: &[Slot], booked: &[SubSlot]) -> Result<Vec<SubSlot>> {
    let mut free = Vec::new();
    for parent in parents {
        let routed: Vec<SubSlot> = booked
            .iter()
            .filter(|b| b.parent == parent.id)
            .copied()
            .collect();
        free.extend(subtract(parent, &routed)?);
    }
    Ok(free)
}
