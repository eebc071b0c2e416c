//! End-to-end tests driving the real router against an in-memory database.

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use chrono::Utc;
use petpro_db::{hash_password, Database, DbConfig, SupplierRecord};
use petpro_web::{routes, AppConfig, AppState};
use uuid::Uuid;

const PASSWORD: &str = "grooming123";

async fn test_app() -> (Router, Database) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let config = AppConfig {
        http_port: 0,
        database_path: ":memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        session_lifetime_secs: 3600,
    };

    let state = AppState::new(config, db.clone());
    (routes::router(state), db)
}

async fn seed_supplier(db: &Database, email: &str, name: &str) -> String {
    let record = SupplierRecord {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        name: name.to_string(),
        password_hash: hash_password(PASSWORD).unwrap(),
        is_active: true,
        created_at: Utc::now(),
    };
    db.suppliers().insert(&record).await.unwrap();
    record.id
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn booking_payload() -> Value {
    json!({
        "serviceType": "Dog Grooming",
        "firstName": "Asha",
        "lastName": "Rao",
        "address": "12 MG Road",
        "phone": "9000000000",
        "preferredDate": "2026-04-01"
    })
}

async fn login(app: &Router, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": email, "password": PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));

    let body = body_json(response).await;
    body["accessToken"].as_str().unwrap().to_string()
}

// =============================================================================
// Booking creation
// =============================================================================

#[tokio::test]
async fn create_booking_starts_pending_with_no_supplier() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/bookings", booking_payload()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;

    assert_eq!(body["status"], "pending");
    assert!(body["supplier_id"].is_null());
    assert_eq!(body["service_type"], "Dog Grooming");
    assert_eq!(body["customer_name"], "Asha Rao");
    assert_eq!(body["city"], "Nagpur");
}

#[tokio::test]
async fn empty_required_field_never_reaches_the_store() {
    let (app, db) = test_app().await;

    let mut payload = booking_payload();
    payload["firstName"] = json!("   ");

    let response = app
        .oneshot(json_request("POST", "/api/bookings", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    assert_eq!(db.bookings().count().await.unwrap(), 0);
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn invalid_credentials_are_rejected_generically() {
    let (app, db) = test_app().await;
    seed_supplier(&db, "meera@petpro.test", "Meera's Mobile Grooming").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "meera@petpro.test", "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn session_lookup_reflects_the_logged_in_supplier() {
    let (app, db) = test_app().await;
    let id = seed_supplier(&db, "meera@petpro.test", "Meera's Mobile Grooming").await;
    let token = login(&app, "meera@petpro.test").await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/session")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["supplier"]["id"], id.as_str());
    assert_eq!(body["supplier"]["name"], "Meera's Mobile Grooming");
}

#[tokio::test]
async fn unauthenticated_api_access_is_401() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/bookings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
}

// =============================================================================
// Dashboard feed and acceptance
// =============================================================================

#[tokio::test]
async fn accept_flow_has_one_winner_and_a_conflict_loser() {
    let (app, db) = test_app().await;
    seed_supplier(&db, "meera@petpro.test", "Meera's Mobile Grooming").await;
    seed_supplier(&db, "rohan@petpro.test", "Rohan Pet Care").await;

    // Customer books
    let created = body_json(
        app.clone()
            .oneshot(json_request("POST", "/api/bookings", booking_payload()))
            .await
            .unwrap(),
    )
    .await;
    let booking_id = created["id"].as_str().unwrap().to_string();

    let winner_token = login(&app, "meera@petpro.test").await;
    let loser_token = login(&app, "rohan@petpro.test").await;

    // Both see the booking in their pending feed
    for token in [&winner_token, &loser_token] {
        let feed = body_json(
            app.clone()
                .oneshot(
                    Request::builder()
                        .uri("/api/bookings")
                        .header(header::AUTHORIZATION, format!("Bearer {}", token))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(feed["pendingCount"], 1);
    }

    let accept_uri = format!("/api/bookings/{}/accept", booking_id);

    // First accept wins
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(&accept_uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", winner_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "accepted");
    assert!(body["supplier_id"].is_string());

    // Second accept loses with a user-facing conflict
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(&accept_uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", loser_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["message"], "Booking already taken by another supplier");

    // The accepted booking left the loser's feed entirely...
    let loser_feed = body_json(
        app.clone()
            .oneshot(
                Request::builder()
                    .uri("/api/bookings")
                    .header(header::AUTHORIZATION, format!("Bearer {}", loser_token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(loser_feed["pendingCount"], 0);
    assert!(loser_feed["bookings"].as_array().unwrap().is_empty());

    // ...and stayed in the winner's, as accepted
    let winner_feed = body_json(
        app.oneshot(
            Request::builder()
                .uri("/api/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {}", winner_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap(),
    )
    .await;
    assert_eq!(winner_feed["pendingCount"], 0);
    let bookings = winner_feed["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["status"], "accepted");
}

// =============================================================================
// Page routes and redirects
// =============================================================================

#[tokio::test]
async fn dashboard_redirects_to_login_without_a_session() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/supplier/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/supplier/login");
}

#[tokio::test]
async fn dashboard_renders_with_a_session_cookie() {
    let (app, db) = test_app().await;
    seed_supplier(&db, "meera@petpro.test", "Meera's Mobile Grooming").await;
    let token = login(&app, "meera@petpro.test").await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/supplier/dashboard")
                .header(header::COOKIE, format!("petpro_session={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Meera's Mobile Grooming"));
}

#[tokio::test]
async fn login_page_redirects_to_dashboard_with_a_session() {
    let (app, db) = test_app().await;
    seed_supplier(&db, "meera@petpro.test", "Meera's Mobile Grooming").await;
    let token = login(&app, "meera@petpro.test").await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/supplier/login")
                .header(header::COOKIE, format!("petpro_session={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/supplier/dashboard");
}

#[tokio::test]
async fn expired_or_garbage_tokens_count_as_no_session() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/supplier/dashboard")
                .header(header::COOKIE, "petpro_session=not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/supplier/login");
}

#[tokio::test]
async fn unknown_paths_redirect_to_the_landing_page() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nowhere")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], true);
}
