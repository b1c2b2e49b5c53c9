//! Error types for slot-engine operations.

use crate::slot::RuleId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A rule's fields are inconsistent (e.g. time-of-day end is not after
    /// its start). Rejected at the boundary, before any interval math runs.
    #[error("malformed rule {rule}: {reason}")]
    MalformedRule { rule: RuleId, reason: String },

    /// A requested unit or booking duration was zero or negative.
    #[error("invalid duration of {0} minutes")]
    InvalidDuration(i64),

    /// Booked data under a rule contradicts itself: a booked sub-slot is not
    /// contained in its claimed parent, or two booked sub-slots overlap.
    /// This means a committed booking upstream bypassed the feasibility
    /// check; the computation for that rule is aborted rather than clamped.
    #[error("booking integrity violation under rule {rule}: {reason}")]
    Integrity { rule: RuleId, reason: String },
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, SlotError>;
