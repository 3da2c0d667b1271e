//! # Validation Module
//!
//! Guest input rules applied before a stay is created.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Check-in form                                                          │
//! │                                                                         │
//! │  Name ──────► validate_guest_name  ── empty?  → InvalidName            │
//! │  Age ───────► validate_guest_age   ── < 18?   → InvalidAge             │
//! │  Phone ─────► validate_phone       ── empty?  → InvalidPhone           │
//! │  Nights ────► validate_nights      ── 1..=365? → InvalidNights         │
//! │                                                                         │
//! │  All pass → Guest::new returns a Guest; any failure aborts check-in    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use baratie_core::validation::{validate_guest_age, validate_nights};
//!
//! assert!(validate_guest_age(18).is_ok());
//! assert!(validate_nights(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_NIGHTS, MIN_GUEST_AGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a guest name and returns it trimmed.
///
/// ```rust
/// use baratie_core::validation::validate_guest_name;
///
/// assert_eq!(validate_guest_name("  Sanji ").unwrap(), "Sanji");
/// assert!(validate_guest_name("   ").is_err());
/// ```
pub fn validate_guest_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::InvalidName);
    }
    Ok(name.to_string())
}

/// Validates a contact phone number and returns it trimmed.
///
/// Only emptiness is checked; the desk accepts any format the guest gives.
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(phone.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that the guest is at least [`MIN_GUEST_AGE`].
pub fn validate_guest_age(age: i64) -> ValidationResult<()> {
    if age < MIN_GUEST_AGE {
        return Err(ValidationError::InvalidAge {
            age,
            min: MIN_GUEST_AGE,
        });
    }
    Ok(())
}

/// Validates the length of stay: at least one night, at most [`MAX_NIGHTS`].
///
/// The upper bound keeps `price_per_night * nights` far from `i64` overflow.
pub fn validate_nights(nights: i64) -> ValidationResult<()> {
    if !(1..=MAX_NIGHTS).contains(&nights) {
        return Err(ValidationError::InvalidNights {
            nights,
            max: MAX_NIGHTS,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_guest_name() {
        assert_eq!(validate_guest_name("Nami").unwrap(), "Nami");
        assert_eq!(validate_guest_name("  Roronoa Zoro  ").unwrap(), "Roronoa Zoro");

        assert_eq!(validate_guest_name(""), Err(ValidationError::InvalidName));
        assert_eq!(validate_guest_name(" \t "), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone(" 98450 12345 ").unwrap(), "98450 12345");
        assert_eq!(validate_phone(""), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_validate_guest_age() {
        assert!(validate_guest_age(18).is_ok());
        assert!(validate_guest_age(65).is_ok());

        assert_eq!(
            validate_guest_age(17),
            Err(ValidationError::InvalidAge { age: 17, min: 18 })
        );
        assert!(validate_guest_age(-1).is_err());
    }

    #[test]
    fn test_validate_nights() {
        assert!(validate_nights(1).is_ok());
        assert!(validate_nights(30).is_ok());

        assert!(validate_nights(365).is_ok());

        assert_eq!(
            validate_nights(0),
            Err(ValidationError::InvalidNights { nights: 0, max: 365 })
        );
        assert!(validate_nights(-2).is_err());
        assert!(validate_nights(366).is_err());
        assert!(validate_nights(i64::MAX).is_err());
    }
}
