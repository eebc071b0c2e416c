//! # Dashboard Feed Filtering
//!
//! The dashboard fetches one working set per load: every pending booking
//! plus the current supplier's accepted bookings. The pending/accepted tab
//! split is a pure filter over that already-fetched set - switching tabs
//! never issues another query.

use crate::types::Booking;

/// Bookings still waiting for a supplier.
pub fn pending_bookings(set: &[Booking]) -> Vec<&Booking> {
    set.iter().filter(|b| b.is_pending()).collect()
}

/// Bookings accepted by the given supplier.
///
/// Rows accepted by other suppliers are not part of the working set, but
/// the filter checks the assignment anyway so a stale or over-fetched set
/// never leaks someone else's bookings into the tab.
pub fn accepted_bookings<'a>(set: &'a [Booking], supplier_id: &str) -> Vec<&'a Booking> {
    set.iter().filter(|b| b.is_accepted_by(supplier_id)).collect()
}

/// Number of pending bookings, shown as the notification badge.
pub fn pending_count(set: &[Booking]) -> usize {
    set.iter().filter(|b| b.is_pending()).count()
}
