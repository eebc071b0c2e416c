//! # Repository Module
//!
//! Database repository implementations for PetPro.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.bookings().accept(id, supplier_id)                         │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  BookingRepository                                                     │
//! │  ├── insert(&self, booking)                                            │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── feed_for_supplier(&self, supplier_id)                             │
//! │  └── accept(&self, id, supplier_id)                                    │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • The conditional-accept predicate lives in exactly one query         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`BookingRepository`] - Booking insert, feed query, race-safe accept
//! - [`SupplierRepository`] - Supplier lookup and credential verification

pub mod booking;
pub mod supplier;

pub use booking::BookingRepository;
pub use supplier::SupplierRepository;
