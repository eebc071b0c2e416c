//! Booking handlers.
//!
//! Three operations:
//! - `create_booking` - public form submission, validated before any write
//! - `booking_feed` - the dashboard working set for the logged-in supplier
//! - `accept_booking` - the race-safe pending -> accepted transition

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::CurrentSupplier;
use crate::error::ApiError;
use crate::AppState;
use petpro_core::{feed, validation, Booking, BookingStatus, ServiceType, DEFAULT_CITY};
use petpro_db::DbError;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Defaults to dog grooming, matching the form's pre-selection.
    #[serde(default)]
    pub service_type: ServiceType,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub preferred_date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFeedResponse {
    /// The full working set: pending + this supplier's accepted, newest first.
    pub bookings: Vec<Booking>,
    /// Notification badge count, computed from the set above (no extra query).
    pub pending_count: usize,
}

/// Create a booking from the public form.
///
/// Validation runs before any store call; a submission with an empty
/// required field never writes. The created record always starts `pending`
/// with no supplier.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    validation::validate_name("first name", &req.first_name)?;
    validation::validate_name("last name", &req.last_name)?;
    validation::validate_address(&req.address)?;
    validation::validate_phone(&req.phone)?;

    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        service_type: req.service_type,
        customer_name: format!("{} {}", req.first_name.trim(), req.last_name.trim()),
        phone: req.phone.trim().to_string(),
        address: req.address.trim().to_string(),
        city: DEFAULT_CITY.to_string(),
        preferred_date: req.preferred_date,
        status: BookingStatus::Pending,
        supplier_id: None,
        created_at: Utc::now(),
    };

    state.db.bookings().insert(&booking).await?;

    info!(
        booking_id = %booking.id,
        service = %booking.service_type,
        "Booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

/// The dashboard feed for the logged-in supplier.
///
/// One query per load; the pending/accepted tab split is a local filter
/// over this response on the client side.
pub async fn booking_feed(
    State(state): State<AppState>,
    supplier: CurrentSupplier,
) -> Result<Json<BookingFeedResponse>, ApiError> {
    let bookings = state.db.bookings().feed_for_supplier(&supplier.id).await?;
    let pending_count = feed::pending_count(&bookings);

    Ok(Json(BookingFeedResponse {
        bookings,
        pending_count,
    }))
}

/// Claim a pending booking for the logged-in supplier.
///
/// The store applies `status = accepted, supplier_id = me` only if the
/// status is still `pending` at execution time. Losing the race yields a
/// 409 and leaves the caller's view untouched; the winning response carries
/// the refreshed row.
pub async fn accept_booking(
    State(state): State<AppState>,
    supplier: CurrentSupplier,
    Path(id): Path<String>,
) -> Result<Json<Booking>, ApiError> {
    validation::validate_uuid(&id)?;

    match state.db.bookings().accept(&id, &supplier.id).await {
        Ok(booking) => {
            info!(booking_id = %id, supplier_id = %supplier.id, "Booking accepted");
            Ok(Json(booking))
        }
        Err(DbError::Conflict { .. }) => {
            warn!(booking_id = %id, supplier_id = %supplier.id, "Booking already taken");
            Err(ApiError::conflict("Booking already taken by another supplier"))
        }
        Err(e) => Err(e.into()),
    }
}
