//! # PetPro Web
//!
//! HTTP application for the PetPro marketplace: the public booking surface
//! and the supplier dashboard.
//!
//! ## Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Routing Surface                                │
//! │                                                                         │
//! │  Pages (redirect-gated)             API (JSON)                         │
//! │  ──────────────────────             ──────────────────────────────     │
//! │  GET  /                             POST /api/bookings        public   │
//! │  GET  /supplier/login               POST /api/auth/login      public   │
//! │  GET  /supplier/dashboard           GET  /api/auth/session    session  │
//! │  *    → redirect to /               POST /api/auth/logout     public   │
//! │                                     GET  /api/bookings        session  │
//! │                                     POST /api/bookings/{id}/accept     │
//! │                                     GET  /api/health          public   │
//! │                                                                         │
//! │  Pages redirect on missing/present sessions; the API answers 401.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_PORT` - HTTP server port (default: 8080)
//! - `DATABASE_PATH` - SQLite file path (default: ./petpro.db)
//! - `JWT_SECRET` - Secret for session token signing
//! - `SESSION_LIFETIME_SECS` - Session token lifetime (default: 86400)

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

// Re-exports
pub use config::AppConfig;
pub use error::{ApiError, ErrorCode};

use crate::auth::JwtManager;
use petpro_db::Database;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: AppConfig,
    pub jwt: JwtManager,
}

impl AppState {
    /// Wires up state from loaded configuration and a connected database.
    pub fn new(config: AppConfig, db: Database) -> Self {
        let jwt = JwtManager::new(config.jwt_secret.clone(), config.session_lifetime_secs);
        AppState { db, config, jwt }
    }
}
