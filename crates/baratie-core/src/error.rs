//! # Error Types
//!
//! Domain-specific error types for baratie-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError  - bad guest input (name, age, phone, nights)         │
//! │  RoomError        - Room state machine misuse (occupied / vacant)      │
//! │                                                                         │
//! │  Registry operations (what the console sees)                           │
//! │  ├── CheckInError   - RoomNotFound | AlreadyOccupied | InvalidGuest    │
//! │  ├── OrderError     - RoomNotFound | RoomVacant | InvalidCategory      │
//! │  │                    | ItemIndexOutOfRange                            │
//! │  └── CheckOutError  - RoomNotFound | RoomVacant                        │
//! │                                                                         │
//! │  None of these are fatal: the operator retries with corrected input.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant's `Display` text is the message the console prints.

use thiserror::Error;

use crate::types::RoomNumber;

// =============================================================================
// Validation Error
// =============================================================================

/// Guest input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty!")]
    InvalidName,

    /// Guest is younger than the minimum check-in age.
    #[error("Guest must be {min} years or older! (got {age})")]
    InvalidAge { age: i64, min: i64 },

    #[error("Phone number cannot be empty!")]
    InvalidPhone,

    /// Nights must be in `1..=max`.
    #[error("Number of nights must be between 1 and {max}! (got {nights})")]
    InvalidNights { nights: i64, max: i64 },
}

// =============================================================================
// Room Error
// =============================================================================

/// A Room was asked to make a transition its current state does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("Room {room} is already occupied")]
    AlreadyOccupied { room: RoomNumber },

    #[error("Room {room} is not occupied")]
    NotOccupied { room: RoomNumber },
}

// =============================================================================
// Registry Operation Errors
// =============================================================================

/// Why a check-in did not happen. No room state changes on any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckInError {
    #[error("Room {0} not found!")]
    RoomNotFound(RoomNumber),

    #[error("Room {0} is already occupied!")]
    AlreadyOccupied(RoomNumber),

    /// Carries the InvalidName / InvalidAge / InvalidPhone / InvalidNights kind.
    #[error("{0}")]
    InvalidGuest(#[from] ValidationError),
}

/// Why a food order was rejected. The guest's order is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Room {0} not found!")]
    RoomNotFound(RoomNumber),

    #[error("Room {0} is not occupied!")]
    RoomVacant(RoomNumber),

    #[error("Invalid food category: {0}")]
    InvalidCategory(String),

    #[error("Invalid item selection! (item {index} does not exist)")]
    ItemIndexOutOfRange { index: usize },
}

/// Why a check-out did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckOutError {
    #[error("Room {0} not found!")]
    RoomNotFound(RoomNumber),

    #[error("Room {0} is already vacant!")]
    RoomVacant(RoomNumber),
}

impl From<RoomError> for CheckInError {
    fn from(err: RoomError) -> Self {
        match err {
            RoomError::AlreadyOccupied { room } | RoomError::NotOccupied { room } => {
                CheckInError::AlreadyOccupied(room)
            }
        }
    }
}

impl From<RoomError> for CheckOutError {
    fn from(err: RoomError) -> Self {
        match err {
            RoomError::AlreadyOccupied { room } | RoomError::NotOccupied { room } => {
                CheckOutError::RoomVacant(room)
            }
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience alias for Room state transitions.
pub type RoomResult<T> = Result<T, RoomError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::InvalidName.to_string(), "Name cannot be empty!");
        assert_eq!(
            ValidationError::InvalidAge { age: 16, min: 18 }.to_string(),
            "Guest must be 18 years or older! (got 16)"
        );
        assert_eq!(
            ValidationError::InvalidNights { nights: 0, max: 365 }.to_string(),
            "Number of nights must be between 1 and 365! (got 0)"
        );
    }

    #[test]
    fn test_validation_converts_to_check_in_error() {
        let err: CheckInError = ValidationError::InvalidPhone.into();
        assert_eq!(err, CheckInError::InvalidGuest(ValidationError::InvalidPhone));
        assert_eq!(err.to_string(), "Phone number cannot be empty!");
    }

    #[test]
    fn test_room_error_maps_to_operation_errors() {
        let occupied: CheckInError = RoomError::AlreadyOccupied { room: 201 }.into();
        assert_eq!(occupied, CheckInError::AlreadyOccupied(201));

        let vacant: CheckOutError = RoomError::NotOccupied { room: 104 }.into();
        assert_eq!(vacant, CheckOutError::RoomVacant(104));
        assert_eq!(vacant.to_string(), "Room 104 is already vacant!");
    }
}
