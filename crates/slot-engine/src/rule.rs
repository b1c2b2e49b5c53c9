//! Availability rules and the activation predicate.
//!
//! A rule is the durable definition of when an owner can be booked. Its
//! recurrence is an explicit sum type -- which fields exist is decided by the
//! variant, so there is no "which combination of optionals means what" logic
//! anywhere downstream.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::slot::{OwnerId, RuleId};

/// A start/end pair of wall-clock times within one day.
///
/// Invariant (checked by [`AvailabilityRule::validate`]): `end` is strictly
/// after `start`. Cross-midnight windows are expressed as Range-only rules,
/// not inverted times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeOfDayWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// An inverted or empty window can never produce a concrete interval.
    pub fn is_inverted(&self) -> bool {
        self.end <= self.start
    }
}

/// When a rule applies.
///
/// All date bounds are inclusive on both ends: a rule whose window ends on a
/// given day is still active that whole day, which also absorbs one-second
/// jitter at the edges from upstream clock normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recurrence {
    /// One fixed day, no repetition.
    Specific {
        day: NaiveDate,
        window: TimeOfDayWindow,
    },
    /// Every day from `start`, until `until` when bounded.
    Daily {
        start: NaiveDate,
        until: Option<NaiveDate>,
        window: TimeOfDayWindow,
    },
    /// Like `Daily`, but only on one weekday.
    Weekly {
        weekday: Weekday,
        start: NaiveDate,
        until: Option<NaiveDate>,
        window: TimeOfDayWindow,
    },
    /// One absolute span with no time-of-day component. Intentionally spans
    /// multiple days as a single interval; it is never re-cut per day.
    RangeOnly {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl Recurrence {
    /// Is this recurrence active on `date`?
    ///
    /// An unbounded Daily/Weekly rule (`until: None`) stays active
    /// indefinitely -- callers bound their own query window.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        match *self {
            Recurrence::Specific { day, .. } => date == day,
            Recurrence::Daily { start, until, .. } => {
                date >= start && until.is_none_or(|u| date <= u)
            }
            Recurrence::Weekly {
                weekday,
                start,
                until,
                ..
            } => {
                date.weekday() == weekday && date >= start && until.is_none_or(|u| date <= u)
            }
            Recurrence::RangeOnly { start, end } => {
                // Boundary days count, even when the span starts late or
                // ends early within them.
                date >= start.date_naive() && date <= end.date_naive()
            }
        }
    }

    /// The wall-clock window, for the kinds that have one.
    pub fn time_of_day(&self) -> Option<TimeOfDayWindow> {
        match *self {
            Recurrence::Specific { window, .. }
            | Recurrence::Daily { window, .. }
            | Recurrence::Weekly { window, .. } => Some(window),
            Recurrence::RangeOnly { .. } => None,
        }
    }
}

/// A tutor's published availability rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    pub id: RuleId,
    pub owner: OwnerId,
    pub title: String,
    pub recurrence: Recurrence,
}

impl AvailabilityRule {
    /// Delegates to [`Recurrence::is_active_on`].
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.recurrence.is_active_on(date)
    }

    /// Boundary validation: reject structurally inconsistent rules before
    /// they reach the interval math.
    pub fn validate(&self) -> Result<()> {
        match self.recurrence {
            Recurrence::RangeOnly { start, end } => {
                if end <= start {
                    return Err(SlotError::MalformedRule {
                        rule: self.id,
                        reason: format!("range end {end} is not after start {start}"),
                    });
                }
            }
            Recurrence::Daily { start, until, .. }
            | Recurrence::Weekly { start, until, .. } => {
                if let Some(until) = until {
                    if until < start {
                        return Err(SlotError::MalformedRule {
                            rule: self.id,
                            reason: format!("window ends {until}, before it starts {start}"),
                        });
                    }
                }
            }
            Recurrence::Specific { .. } => {}
        }

        if let Some(window) = self.recurrence.time_of_day() {
            if window.is_inverted() {
                return Err(SlotError::MalformedRule {
                    rule: self.id,
                    reason: format!(
                        "time-of-day end {} is not after start {}",
                        window.end, window.start
                    ),
                });
            }
        }

        Ok(())
    }
}
