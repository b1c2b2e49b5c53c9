//! Splitting free time into fixed-duration bookable units.
//!
//! A free span from 8pm to 10pm split by 30 minutes becomes 8:00-8:30,
//! 8:30-9:00, 9:00-9:30, 9:30-10:00. A trailing remainder shorter than the
//! unit is silently dropped -- partial bookings are never offered.

use chrono::Duration;

use crate::error::{Result, SlotError};
use crate::slot::SubSlot;

/// Divide one free sub-slot into consecutive `unit_minutes` units.
///
/// # Errors
/// `SlotError::InvalidDuration` when `unit_minutes <= 0`.
pub fn split(free: &SubSlot, unit_minutes: i64) -> Result<Vec<SubSlot>> {
    if unit_minutes <= 0 {
        return Err(SlotError::InvalidDuration(unit_minutes));
    }

    let unit = Duration::minutes(unit_minutes);
    let mut units = Vec::new();
    let mut cursor = free.start;
    while cursor + unit <= free.end {
        units.push(SubSlot {
            parent: free.parent,
            start: cursor,
            end: cursor + unit,
        });
        cursor = cursor + unit;
    }
    Ok(units)
}

/// Divide a list of free sub-slots, concatenating each one's units in order.
pub fn split_batch(free: &[SubSlot], unit_minutes: i64) -> Result<Vec<SubSlot>> {
    let mut units = Vec::new();
    for slot in free {
        units.extend(split(slot, unit_minutes)?);
    }
    Ok(units)
}
