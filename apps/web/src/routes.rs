//! Router assembly.
//!
//! Public routes: landing page, booking creation, login, logout, health.
//! Session-gated routes authenticate through the [`CurrentSupplier`]
//! extractor (401 for API calls); page routes use the optional form of the
//! same extractor to decide redirects instead.
//!
//! [`CurrentSupplier`]: crate::auth::CurrentSupplier

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, bookings, health, pages};
use crate::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::landing))
        .route("/supplier/login", get(pages::login_page))
        .route("/supplier/dashboard", get(pages::dashboard_page))
        // Auth API
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/session", get(auth::session))
        .route("/api/auth/logout", post(auth::logout))
        // Booking API
        .route(
            "/api/bookings",
            post(bookings::create_booking).get(bookings::booking_feed),
        )
        .route("/api/bookings/{id}/accept", post(bookings::accept_booking))
        // Health
        .route("/api/health", get(health::health))
        // Everything else goes home
        .fallback(pages::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
