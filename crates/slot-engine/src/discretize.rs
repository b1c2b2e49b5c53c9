//! Projection of an abstract rule onto one calendar day.
//!
//! Turns "Mondays 09:00-11:00" plus a concrete Monday into one absolute UTC
//! interval. This is the only place concrete intervals are born.

use chrono::NaiveDate;

use crate::error::{Result, SlotError};
use crate::rule::{AvailabilityRule, Recurrence};
use crate::slot::Slot;

/// Realize `rule` on `date` as one concrete interval.
///
/// Returns `Ok(None)` when the rule is simply not active that day -- probing
/// an arbitrary date is an ordinary query, not an error.
///
/// Range-only rules yield their full absolute span, un-clipped: they span
/// days as a single interval and are never re-cut per day.
///
/// # Errors
/// `SlotError::MalformedRule` when the rule's window can never produce a
/// valid interval (inverted time-of-day, or an inverted absolute range).
pub fn discretize(rule: &AvailabilityRule, date: NaiveDate) -> Result<Option<Slot>> {
    if !rule.is_active_on(date) {
        return Ok(None);
    }

    let window = match rule.recurrence {
        Recurrence::RangeOnly { start, end } => {
            if end <= start {
                return Err(SlotError::MalformedRule {
                    rule: rule.id,
                    reason: format!("range end {end} is not after start {start}"),
                });
            }
            return Ok(Some(Slot {
                id: rule.id,
                start,
                end,
            }));
        }
        Recurrence::Specific { window, .. }
        | Recurrence::Daily { window, .. }
        | Recurrence::Weekly { window, .. } => window,
    };

    if window.is_inverted() {
        return Err(SlotError::MalformedRule {
            rule: rule.id,
            reason: format!(
                "time-of-day end {} is not after start {}",
                window.end, window.start
            ),
        });
    }

    Ok(Some(Slot {
        id: rule.id,
        start: date.and_time(window.start).and_utc(),
        end: date.and_time(window.end).and_utc(),
    }))
}
