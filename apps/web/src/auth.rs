//! JWT session module.
//!
//! Handles session token generation and validation, plus the request-side
//! extraction used by handlers and page guards. Sessions are stateless: the
//! token is the session, delivered as a bearer header by API clients and as
//! an HttpOnly cookie so the page routes can gate on it.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;
use petpro_core::Supplier;

/// Name of the session cookie consumed by the page routes.
pub const SESSION_COOKIE: &str = "petpro_session";

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (supplier id)
    pub sub: String,

    /// Supplier display name
    pub name: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// JWT ID (unique identifier for this token)
    pub jti: String,

    /// Token type (always "session")
    pub token_type: String,
}

/// JWT session token manager.
#[derive(Clone)]
pub struct JwtManager {
    secret: String,
    session_lifetime_secs: i64,
}

impl JwtManager {
    /// Create a new JWT manager.
    pub fn new(secret: String, session_lifetime_secs: i64) -> Self {
        JwtManager {
            secret,
            session_lifetime_secs,
        }
    }

    /// Generate a session token for a logged-in supplier.
    pub fn generate_session_token(&self, supplier: &Supplier) -> Result<String, ApiError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.session_lifetime_secs);

        let claims = Claims {
            sub: supplier.id.clone(),
            name: supplier.name.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: "session".to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::internal(format!("Failed to generate token: {}", e)))
    }

    /// Validate and decode a session token.
    pub fn validate_session_token(&self, token: &str) -> Result<Claims, ApiError> {
        let validation = Validation::default();

        let token_data: TokenData<Claims> = decode(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| ApiError::unauthorized("Invalid or expired session"))?;

        if token_data.claims.token_type != "session" {
            return Err(ApiError::unauthorized("Invalid or expired session"));
        }

        Ok(token_data.claims)
    }

    /// The configured session lifetime, for login responses and cookies.
    pub fn session_lifetime_secs(&self) -> i64 {
        self.session_lifetime_secs
    }
}

// =============================================================================
// Request-Side Extraction
// =============================================================================

/// Extract bearer token from an Authorization header value.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// Extract a cookie value from a Cookie header value.
fn extract_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
}

/// The session token carried by a request, if any.
///
/// API clients send `Authorization: Bearer <token>`; browsers send the
/// session cookie. The bearer header wins when both are present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
    {
        return Some(token.to_string());
    }

    headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| extract_cookie(h, SESSION_COOKIE))
        .map(|t| t.to_string())
}

/// Build the Set-Cookie value storing a session token.
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, max_age_secs
    )
}

/// Build the Set-Cookie value clearing the session (sign-out).
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

// =============================================================================
// Current Supplier Extractor
// =============================================================================

/// The authenticated supplier behind a request.
///
/// As a required extractor it rejects with 401; as `Option<CurrentSupplier>`
/// it never rejects, which is what the page guards use to decide redirects.
#[derive(Debug, Clone)]
pub struct CurrentSupplier {
    pub id: String,
    pub name: String,
}

impl From<Claims> for CurrentSupplier {
    fn from(claims: Claims) -> Self {
        CurrentSupplier {
            id: claims.sub,
            name: claims.name,
        }
    }
}

impl FromRequestParts<AppState> for CurrentSupplier {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

        let claims = state.jwt.validate_session_token(&token)?;
        Ok(CurrentSupplier::from(claims))
    }
}

impl OptionalFromRequestParts<AppState> for CurrentSupplier {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        // A present-but-invalid token is treated the same as no token
        Ok(token_from_headers(&parts.headers)
            .and_then(|token| state.jwt.validate_session_token(&token).ok())
            .map(CurrentSupplier::from))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier() -> Supplier {
        Supplier {
            id: "supplier-001".to_string(),
            name: "Happy Tails Studio".to_string(),
        }
    }

    #[test]
    fn test_session_token_roundtrip() {
        let manager = JwtManager::new("test-secret".to_string(), 3600);

        let token = manager.generate_session_token(&supplier()).unwrap();
        let claims = manager.validate_session_token(&token).unwrap();

        assert_eq!(claims.sub, "supplier-001");
        assert_eq!(claims.name, "Happy Tails Studio");
        assert_eq!(claims.token_type, "session");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let manager = JwtManager::new("test-secret".to_string(), 3600);
        let other = JwtManager::new("other-secret".to_string(), 3600);

        let token = manager.generate_session_token(&supplier()).unwrap();
        assert!(other.validate_session_token(&token).is_err());
    }

    #[test]
    fn test_bearer_extraction() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
    }

    #[test]
    fn test_cookie_extraction() {
        let header = "theme=dark; petpro_session=tok-123; other=1";
        assert_eq!(extract_cookie(header, SESSION_COOKIE), Some("tok-123"));
        assert_eq!(extract_cookie("theme=dark", SESSION_COOKIE), None);
    }

    #[test]
    fn test_token_from_headers_prefers_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer from-header".parse().unwrap());
        headers.insert(
            header::COOKIE,
            format!("{}=from-cookie", SESSION_COOKIE).parse().unwrap(),
        );

        assert_eq!(token_from_headers(&headers), Some("from-header".to_string()));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
