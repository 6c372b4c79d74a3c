use thiserror::Error;

/// Errors that can occur when parsing a date key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    #[error("Date key must have the form YYYY-MM-DD: {0}")]
    Malformed(String),
    #[error("Date key is not a real calendar date: {0}")]
    NotACalendarDate(String),
}

/// Errors that can occur when parsing a time-of-day label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeOfDayError {
    #[error("Time label must have the form hh:mm AM|PM: {0}")]
    Malformed(String),
    #[error("Time label is out of range: {0}")]
    OutOfRange(String),
}

/// Errors that can occur when validating an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event ID cannot be empty")]
    EmptyId,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Invalid event time: {0}")]
    InvalidTime(#[from] TimeOfDayError),
}
