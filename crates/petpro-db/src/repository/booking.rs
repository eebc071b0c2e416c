//! # Booking Repository
//!
//! Database operations for bookings.
//!
//! ## Booking Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Booking Lifecycle                                 │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── insert() → Booking { status: Pending, supplier_id: None }      │
//! │                                                                         │
//! │  2. APPEAR IN DASHBOARDS                                               │
//! │     └── feed_for_supplier() → pending + that supplier's accepted       │
//! │                                                                         │
//! │  3. ACCEPT (at most once, race-safe)                                   │
//! │     └── accept() → UPDATE ... WHERE id = ? AND status = 'pending'      │
//! │         ├── 1 row  → Booking { status: Accepted, supplier_id: Some }   │
//! │         └── 0 rows → Conflict (someone else won) or NotFound           │
//! │                                                                         │
//! │  Bookings are never deleted.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use petpro_core::Booking;

/// Repository for booking database operations.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    /// Creates a new BookingRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookingRepository { pool }
    }

    /// Gets a booking by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT
                id, service_type, customer_name, phone, address, city,
                preferred_date, status, supplier_id, created_at
            FROM bookings
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Inserts a new booking.
    ///
    /// The caller constructs the row (id, timestamps, fixed city); creation
    /// always starts the lifecycle at `pending` with no supplier.
    pub async fn insert(&self, booking: &Booking) -> DbResult<()> {
        debug!(id = %booking.id, service = %booking.service_type, "Inserting booking");

        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, service_type, customer_name, phone, address, city,
                preferred_date, status, supplier_id, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6,
                ?7, ?8, ?9, ?10
            )
            "#,
        )
        .bind(&booking.id)
        .bind(booking.service_type)
        .bind(&booking.customer_name)
        .bind(&booking.phone)
        .bind(&booking.address)
        .bind(&booking.city)
        .bind(booking.preferred_date)
        .bind(booking.status)
        .bind(&booking.supplier_id)
        .bind(booking.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// The dashboard working set for one supplier, in one query:
    /// every pending booking plus the bookings this supplier accepted,
    /// newest first.
    ///
    /// The pending/accepted tab split happens over this already-fetched set
    /// (see `petpro_core::feed`); switching tabs issues no further queries.
    pub async fn feed_for_supplier(&self, supplier_id: &str) -> DbResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT
                id, service_type, customer_name, phone, address, city,
                preferred_date, status, supplier_id, created_at
            FROM bookings
            WHERE status = 'pending'
               OR (status = 'accepted' AND supplier_id = ?1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(supplier_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Claims a pending booking for a supplier. Race-safe.
    ///
    /// ## How Race Safety Works
    /// The UPDATE carries the guard predicate `status = 'pending'` and sets
    /// the status and the supplier reference in the same atomic statement.
    /// SQLite applies the whole statement or none of it, so when two
    /// suppliers accept concurrently exactly one UPDATE matches a row.
    ///
    /// This MUST stay a single conditional statement. A read-then-write
    /// sequence would reintroduce the double-acceptance race.
    ///
    /// ## Returns
    /// * `Ok(Booking)` - the refreshed row after a successful claim
    /// * `Err(DbError::Conflict)` - another supplier already accepted it
    /// * `Err(DbError::NotFound)` - no booking with this id
    pub async fn accept(&self, booking_id: &str, supplier_id: &str) -> DbResult<Booking> {
        debug!(booking_id = %booking_id, supplier_id = %supplier_id, "Accepting booking");

        let result = sqlx::query(
            r#"
            UPDATE bookings SET
                status = 'accepted',
                supplier_id = ?2
            WHERE id = ?1 AND status = 'pending'
            "#,
        )
        .bind(booking_id)
        .bind(supplier_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Distinguish "lost the race" from "no such booking"
            return match self.get_by_id(booking_id).await? {
                Some(_) => Err(DbError::conflict("Booking", booking_id)),
                None => Err(DbError::not_found("Booking", booking_id)),
            };
        }

        self.get_by_id(booking_id)
            .await?
            .ok_or_else(|| DbError::not_found("Booking", booking_id))
    }

    /// Total number of bookings.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
