// Error taxonomy
// Every failure in the scheduling core is local and recoverable.

use thiserror::Error;

use crate::models::event::EventId;

/// Errors surfaced by the scheduling core to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A display time string did not match `H:MM am|pm`.
    #[error("invalid time format: {0:?}")]
    InvalidFormat(String),

    /// A derived minute, cell or slot index fell outside its configured bounds.
    #[error("{what} {value} is outside the range {min}..={max}")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// An event interval whose end is not after its start.
    #[error("event end time ({end}) must be after start time ({start})")]
    InvalidInterval { start: u16, end: u16 },

    /// An operation named an event id the model does not hold.
    #[error("event with id {0} not found")]
    NotFound(EventId),

    /// A color token that is not `#RGB` or `#RRGGBB`.
    #[error("color must be in hex format (#RRGGBB or #RGB), got {0:?}")]
    InvalidColor(String),
}

impl ScheduleError {
    pub(crate) fn out_of_range(what: &'static str, value: i64, min: i64, max: i64) -> Self {
        ScheduleError::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
