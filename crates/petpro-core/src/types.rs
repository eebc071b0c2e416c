//! # Domain Types
//!
//! Core domain types used throughout PetPro.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Booking      │   │    Supplier     │   │  ServiceType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  Dog Grooming   │       │
//! │  │  service_type   │   │  name           │   │  Cat Grooming   │       │
//! │  │  customer_name  │   └─────────────────┘   │  Bath & Trim    │       │
//! │  │  status         │                         │  Pet Training   │       │
//! │  │  supplier_id    │   ┌─────────────────┐   └─────────────────┘       │
//! │  └─────────────────┘   │  BookingStatus  │                             │
//! │                        │  ─────────────  │                             │
//! │                        │  Pending        │                             │
//! │                        │  Accepted       │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Booking Lifecycle Invariant
//! A booking starts `Pending` with `supplier_id = None` and transitions
//! exactly once to `Accepted`, in the same write that sets `supplier_id`.
//! The transition itself is enforced by the store's conditional update
//! (see petpro-db); these types only describe the states.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Service Type
// =============================================================================

/// The grooming services a customer can book.
///
/// Wire labels are the human-readable names (`"Dog Grooming"` etc.) both in
/// JSON and in the database, matching what the booking form displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum ServiceType {
    /// Complete grooming for dogs of all breeds and sizes.
    #[serde(rename = "Dog Grooming")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Dog Grooming"))]
    DogGrooming,

    /// Gentle grooming tailored for feline comfort.
    #[serde(rename = "Cat Grooming")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Cat Grooming"))]
    CatGrooming,

    /// Quick refresh with bath, nails, and coat trim.
    #[serde(rename = "Bath & Trim")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Bath & Trim"))]
    BathAndTrim,

    /// Basic obedience and behavior training at home.
    #[serde(rename = "Pet Training")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Pet Training"))]
    PetTraining,
}

impl ServiceType {
    /// All bookable services, in display order.
    pub const ALL: [ServiceType; 4] = [
        ServiceType::DogGrooming,
        ServiceType::CatGrooming,
        ServiceType::BathAndTrim,
        ServiceType::PetTraining,
    ];

    /// The display label, identical to the wire label.
    pub const fn label(&self) -> &'static str {
        match self {
            ServiceType::DogGrooming => "Dog Grooming",
            ServiceType::CatGrooming => "Cat Grooming",
            ServiceType::BathAndTrim => "Bath & Trim",
            ServiceType::PetTraining => "Pet Training",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Default for ServiceType {
    fn default() -> Self {
        // The booking form pre-selects dog grooming
        ServiceType::DogGrooming
    }
}

// =============================================================================
// Booking Status
// =============================================================================

/// The lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Waiting for a supplier to claim it.
    Pending,
    /// Claimed by exactly one supplier.
    Accepted,
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

// =============================================================================
// Booking
// =============================================================================

/// A customer's service request.
///
/// Created by the public booking flow, claimed at most once by a supplier,
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Booking {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Which service was requested.
    pub service_type: ServiceType,

    /// Customer full name ("First Last", joined at submission time).
    pub customer_name: String,

    /// Contact phone number.
    pub phone: String,

    /// Street address the groomer travels to.
    pub address: String,

    /// Operating city (fixed, see [`crate::DEFAULT_CITY`]).
    pub city: String,

    /// The date the customer asked for.
    pub preferred_date: NaiveDate,

    /// Lifecycle status.
    pub status: BookingStatus,

    /// The supplier that claimed this booking. None exactly while pending.
    pub supplier_id: Option<String>,

    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Whether this booking is still waiting for a supplier.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    /// Whether this booking was accepted by the given supplier.
    pub fn is_accepted_by(&self, supplier_id: &str) -> bool {
        self.status == BookingStatus::Accepted
            && self.supplier_id.as_deref() == Some(supplier_id)
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A grooming provider, as seen by the rest of the system.
///
/// Credentials live in the database layer and are never part of this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    /// Display name shown in the dashboard header.
    pub name: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
