use thiserror::Error;

use crate::calendar::{DateKeyError, EventError};

/// Errors that can occur during event store operations.
///
/// None of these leave the store partially modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Event not found: {id}")]
    EventNotFound { id: String },
    #[error("Event already exists: {id}")]
    AlreadyExists { id: String },
    #[error("Invalid date key: {0}")]
    InvalidDateKey(#[from] DateKeyError),
    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] EventError),
}

impl StoreError {
    pub(crate) fn not_found(id: &str) -> Self {
        Self::EventNotFound { id: id.to_string() }
    }

    /// Returns true if the operation failed because the event does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::EventNotFound { .. })
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(
            StoreError::not_found("no-such-id").to_string(),
            "Event not found: no-such-id"
        );
        assert_eq!(
            StoreError::AlreadyExists {
                id: "event-6".to_string()
            }
            .to_string(),
            "Event already exists: event-6"
        );
        assert_eq!(
            StoreError::from(DateKeyError::NotACalendarDate("2025-02-30".to_string())).to_string(),
            "Invalid date key: Date key is not a real calendar date: 2025-02-30"
        );
        assert_eq!(
            StoreError::from(EventError::EmptyTitle).to_string(),
            "Invalid event: Event title cannot be empty"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(StoreError::not_found("x").is_not_found());
        assert!(!StoreError::from(EventError::EmptyId).is_not_found());
    }
}
