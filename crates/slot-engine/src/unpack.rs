//! Rolling multi-day availability -- the data a booking page renders.
//!
//! For each day of the query window: keep the rules active that day, realize
//! each as a concrete interval, subtract that rule's bookings, and split the
//! remainder into bookable units. Output is grouped by day, ascending, and is
//! fully deterministic: identical inputs always produce identical output,
//! because UI layers diff against it.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::discretize::discretize;
use crate::error::{Result, SlotError};
use crate::rule::{AvailabilityRule, Recurrence};
use crate::slot::{is_intersecting, is_super_slot, RuleId, Slot, SubSlot};
use crate::split::split_batch;
use crate::subtract::subtract;

/// Default query window of the booking page.
pub const DEFAULT_WINDOW_DAYS: u32 = 14;

/// Default lesson length.
pub const DEFAULT_UNIT_MINUTES: i64 = 30;

/// A rolling availability query: `days` calendar days starting at `start`,
/// with free time cut into `unit_minutes` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnpackQuery {
    pub start: NaiveDate,
    pub days: u32,
    pub unit_minutes: i64,
}

impl UnpackQuery {
    /// The product defaults: a two-week window of 30-minute lessons.
    pub fn new(start: NaiveDate) -> Self {
        Self {
            start,
            days: DEFAULT_WINDOW_DAYS,
            unit_minutes: DEFAULT_UNIT_MINUTES,
        }
    }
}

/// One day of availability. For [`unpack`] the spans are fixed-duration
/// bookable units; for [`unpack_free`] they are the raw free remainders.
/// Spans are ascending within each rule; rules appear in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: NaiveDate,
    pub units: Vec<SubSlot>,
}

/// The un-split free remainders for each day of a window -- what a calendar
/// view renders before any lesson duration is chosen.
///
/// `booked` holds every committed reservation in the horizon, across all
/// rules; each is routed to its rule and day by parent id and containment.
/// A Range-only rule spans days as one interval, so its span is emitted
/// once, under the first queried day it is active on.
///
/// # Errors
/// `SlotError::Integrity` when a booking overlaps another under the same
/// rule, or straddles its rule's interval boundary.
pub fn unpack_free(
    rules: &[AvailabilityRule],
    booked: &[SubSlot],
    start: NaiveDate,
    window_days: u32,
) -> Result<Vec<DayAvailability>> {
    // Range-only rules already realized earlier in this window.
    let mut emitted_ranges: HashSet<RuleId> = HashSet::new();

    let mut days = Vec::with_capacity(window_days as usize);
    for offset in 0..window_days {
        let day = start + Days::new(u64::from(offset));
        let mut units = Vec::new();

        for rule in rules {
            if !rule.is_active_on(day) {
                continue;
            }
            if matches!(rule.recurrence, Recurrence::RangeOnly { .. })
                && !emitted_ranges.insert(rule.id)
            {
                continue;
            }
            let parent = match discretize(rule, day)? {
                Some(parent) => parent,
                None => continue,
            };

            let routed = route_bookings(&parent, booked)?;
            units.extend(subtract(&parent, &routed)?);
        }

        days.push(DayAvailability { day, units });
    }

    Ok(days)
}

/// The bookable units for each day of the query window: [`unpack_free`] with
/// every free remainder cut into `unit_minutes` units.
///
/// # Errors
/// `SlotError::InvalidDuration` for a non-positive unit, plus everything
/// [`unpack_free`] can fail with.
pub fn unpack(
    rules: &[AvailabilityRule],
    booked: &[SubSlot],
    query: &UnpackQuery,
) -> Result<Vec<DayAvailability>> {
    if query.unit_minutes <= 0 {
        return Err(SlotError::InvalidDuration(query.unit_minutes));
    }

    unpack_free(rules, booked, query.start, query.days)?
        .into_iter()
        .map(|d| {
            Ok(DayAvailability {
                day: d.day,
                units: split_batch(&d.units, query.unit_minutes)?,
            })
        })
        .collect()
}

/// Pick the bookings that belong to this parent interval: matching rule id
/// and fully contained. A booking for the same rule on another day is simply
/// not routed here; one that *partially* overlaps the interval can belong to
/// no realization of the rule and is corrupt.
fn route_bookings(parent: &Slot, booked: &[SubSlot]) -> Result<Vec<SubSlot>> {
    let mut routed = Vec::new();
    for b in booked.iter().filter(|b| b.parent == parent.id) {
        if is_super_slot(parent, b) {
            routed.push(*b);
        } else if is_intersecting(b, std::slice::from_ref(parent)) {
            return Err(SlotError::Integrity {
                rule: parent.id,
                reason: format!(
                    "booked sub-slot [{}, {}) straddles the interval [{}, {})",
                    b.start, b.end, parent.start, parent.end
                ),
            });
        }
    }
    Ok(routed)
}
