//! Supplier authentication handlers.
//!
//! Login exchanges email + password for a JWT session token. The token is
//! returned in the response body for API clients and mirrored into an
//! HttpOnly cookie so the page routes can gate on it. Sessions are
//! stateless; sign-out clears the cookie.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{clear_session_cookie, session_cookie, CurrentSupplier};
use crate::error::ApiError;
use crate::AppState;
use petpro_core::Supplier;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub supplier: Supplier,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub supplier: Supplier,
}

/// Exchange supplier credentials for a session token.
///
/// Failures are a single generic 401: the response never reveals whether
/// the email or the password was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = req.email.trim();

    let record = state.db.suppliers().get_by_email(email).await?;

    let record = match record {
        Some(r) if r.verify_password(&req.password) => r,
        _ => {
            warn!(email = %email, "Login failed");
            return Err(ApiError::unauthorized("Invalid email or password"));
        }
    };

    let supplier = record.to_supplier();
    let token = state.jwt.generate_session_token(&supplier)?;
    let expires_in = state.jwt.session_lifetime_secs();

    info!(supplier_id = %supplier.id, "Supplier logged in");

    Ok((
        [(header::SET_COOKIE, session_cookie(&token, expires_in))],
        Json(LoginResponse {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_in,
            supplier,
        }),
    ))
}

/// Current-session lookup: who is logged in, per the presented token.
pub async fn session(supplier: CurrentSupplier) -> Json<SessionResponse> {
    Json(SessionResponse {
        supplier: Supplier {
            id: supplier.id,
            name: supplier.name,
        },
    })
}

/// Sign out: clear the session cookie.
///
/// Tokens are stateless, so sign-out is cookie removal; an API client
/// simply discards its bearer token.
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, clear_session_cookie())],
    )
}
