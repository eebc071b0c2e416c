//! Page routes and their redirect guards.
//!
//! Three logical paths:
//! - `/` - public landing with the service catalog and booking form
//! - `/supplier/login` - login page; an authenticated visit redirects to
//!   the dashboard
//! - `/supplier/dashboard` - dashboard shell; an unauthenticated visit
//!   redirects to login
//!
//! Every other path redirects to the landing page. Guards re-check the
//! session on every load; a present-but-invalid token counts as absent.
//! The pages are deliberately thin shells over the JSON API.

use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::auth::CurrentSupplier;
use petpro_core::ServiceType;

/// Public landing page.
pub async fn landing() -> Html<String> {
    let services: String = ServiceType::ALL
        .iter()
        .map(|s| format!("        <li>{}</li>\n", s.label()))
        .collect();

    Html(format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>PetPro - At-Home Pet Grooming</title>
  </head>
  <body>
    <header>
      <h1>PetPro</h1>
      <p>Stress-free pet grooming, at your doorstep.</p>
    </header>
    <main>
      <h2>Our Services</h2>
      <ul>
{services}      </ul>
      <p>Book via <code>POST /api/bookings</code>. A provider will contact you shortly.</p>
      <p><a href="/supplier/login">Supplier login</a></p>
    </main>
  </body>
</html>
"#
    ))
}

/// Supplier login page. Already signed in? Straight to the dashboard.
pub async fn login_page(supplier: Option<CurrentSupplier>) -> Response {
    if supplier.is_some() {
        return Redirect::to("/supplier/dashboard").into_response();
    }

    Html(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>PetPro - Supplier Login</title>
  </head>
  <body>
    <main>
      <h1>Supplier Login</h1>
      <p>Sign in via <code>POST /api/auth/login</code> with your email and password.</p>
    </main>
  </body>
</html>
"#,
    )
    .into_response()
}

/// Supplier dashboard shell. No session? Back to login.
pub async fn dashboard_page(supplier: Option<CurrentSupplier>) -> Response {
    let supplier = match supplier {
        Some(s) => s,
        None => return Redirect::to("/supplier/login").into_response(),
    };

    Html(format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>PetPro - Supplier Dashboard</title>
  </head>
  <body>
    <header>
      <h1>PetPro - Supplier Dashboard</h1>
      <p>Welcome, {name}</p>
    </header>
    <main>
      <p>Bookings feed: <code>GET /api/bookings</code></p>
      <p>Accept a booking: <code>POST /api/bookings/{{id}}/accept</code></p>
    </main>
  </body>
</html>
"#,
        name = supplier.name
    ))
    .into_response()
}

/// Unknown paths land back on the public landing page.
pub async fn fallback() -> Redirect {
    Redirect::to("/")
}
