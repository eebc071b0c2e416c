//! # petpro-core: Pure Domain Logic for PetPro
//!
//! This crate is the **heart** of PetPro. It contains the booking domain
//! as pure types and functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PetPro Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Surface (axum)                          │   │
//! │  │    Landing ──► Booking Form ──► Supplier Login ──► Dashboard   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ petpro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   feed    │  │ validation│  │   error   │  │   │
//! │  │   │  Booking  │  │  pending  │  │   rules   │  │  typed    │  │   │
//! │  │   │  Supplier │  │  accepted │  │   checks  │  │  errors   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    petpro-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Booking, Supplier, ServiceType, BookingStatus)
//! - [`feed`] - Pure filtering over a fetched dashboard working set
//! - [`error`] - Domain error types
//! - [`validation`] - Booking form validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **One Lifecycle**: A booking moves `pending -> accepted` exactly once,
//!    and only together with a supplier assignment

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod feed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use petpro_core::Booking` instead of
// `use petpro_core::types::Booking`

pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The single city PetPro currently operates in.
///
/// ## Why a constant?
/// v0.1 serves one city; customers never supply it. The bookings table keeps
/// a city column so expansion is a data change, not a schema change.
pub const DEFAULT_CITY: &str = "Nagpur";

/// Maximum length of a customer first or last name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a street address.
pub const MAX_ADDRESS_LEN: usize = 300;

/// Maximum length of a phone number field.
pub const MAX_PHONE_LEN: usize = 20;
