//! # Error Types
//!
//! Domain-specific error types for petpro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  petpro-core errors (this file)                                        │
//! │  ├── CoreError        - Booking lifecycle errors                       │
//! │  └── ValidationError  - Form input validation failures                 │
//! │                                                                         │
//! │  petpro-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Web API errors (in app)                                               │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Client       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (booking id, field name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Booking domain errors.
///
/// These errors represent lifecycle rule violations. They should be caught
/// and translated to user-facing messages by the web layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Booking cannot be found.
    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    /// Another supplier's conditional update won the acceptance race.
    ///
    /// ## When This Occurs
    /// Two suppliers press Accept on the same pending booking; the store
    /// applies exactly one update. The loser sees this error and must not
    /// assume the booking is theirs.
    #[error("Booking {booking_id} already taken by another supplier")]
    BookingAlreadyTaken { booking_id: String },

    /// Supplier cannot be found.
    #[error("Supplier not found: {0}")]
    SupplierNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Booking form validation errors.
///
/// These occur when submitted input doesn't meet requirements. Validation
/// runs before any database work, so a failed submission never writes.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., invalid UUID, invalid phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::BookingAlreadyTaken {
            booking_id: "b-42".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Booking b-42 already taken by another supplier"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "first name".to_string(),
        };
        assert_eq!(err.to_string(), "first name is required");

        let err = ValidationError::TooLong {
            field: "address".to_string(),
            max: 300,
        };
        assert_eq!(err.to_string(), "address must be at most 300 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "phone".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
