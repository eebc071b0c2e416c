//! # Validation Module
//!
//! Booking form validation for PetPro.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Request deserialization (serde)                              │
//! │  ├── Type checks (service type is a known variant, date parses)        │
//! │  └── Rejects malformed JSON outright                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before any database call)                       │
//! │  ├── Required fields are non-empty after trimming                      │
//! │  └── Length caps and character rules                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Status CHECK constraint                                           │
//! │                                                                         │
//! │  A submission that fails here never reaches the store.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_PHONE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name part (first or last name).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
///
/// ## Example
/// ```rust
/// use petpro_core::validation::validate_name;
///
/// assert!(validate_name("first name", "Asha").is_ok());
/// assert!(validate_name("first name", "  ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a street address.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 300 characters
pub fn validate_address(address: &str) -> ValidationResult<()> {
    let address = address.trim();

    if address.is_empty() {
        return Err(ValidationError::Required {
            field: "address".to_string(),
        });
    }

    if address.len() > MAX_ADDRESS_LEN {
        return Err(ValidationError::TooLong {
            field: "address".to_string(),
            max: MAX_ADDRESS_LEN,
        });
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 20 characters
/// - May contain digits, spaces, and `+ - ( )`
///
/// Anything stricter belongs to a phone-verification flow, not a form check.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() > MAX_PHONE_LEN {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: MAX_PHONE_LEN,
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, and + - ( )".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Rules
/// - Must be a valid UUID format
/// - 36 characters with hyphens: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
///
/// ## Example
/// ```rust
/// use petpro_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    // Try to parse as UUID
    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        // Valid names
        assert!(validate_name("first name", "Asha").is_ok());
        assert!(validate_name("last name", "Rao").is_ok());

        // Invalid names
        assert!(validate_name("first name", "").is_err());
        assert!(validate_name("first name", "   ").is_err());
        assert!(validate_name("first name", &"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("12 MG Road").is_ok());
        assert!(validate_address("").is_err());
        assert!(validate_address(&"A".repeat(400)).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9000000000").is_ok());
        assert!(validate_phone("+91 90000 00000").is_ok());
        assert!(validate_phone("(0712) 555-0199").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("   ").is_err());
        assert!(validate_phone("phone me").is_err());
        assert!(validate_phone(&"9".repeat(30)).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
        assert!(validate_uuid("123").is_err());
    }
}
