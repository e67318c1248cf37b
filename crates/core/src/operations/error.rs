use chrono::NaiveDate;
use thiserror::Error;

/// User-input rejection. Every variant is recovered locally: the handler
/// aborts with no mutation and the message is surfaced as a warning notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("no slot is selected")]
    NoSelection,
    #[error("hangar '{name}' is not part of the configured grid")]
    UnknownHangar { name: String },
    #[error("date range is reversed: {start} is after {end}")]
    ReversedRange { start: NaiveDate, end: NaiveDate },
    #[error("{date} is outside the configured window {window_start} to {window_end}")]
    OutOfWindow {
        date: NaiveDate,
        window_start: NaiveDate,
        window_end: NaiveDate,
    },
    #[error("description must not be empty")]
    EmptyDescription,
}
