//! HTML view handlers
//!
//! The submission and admin views are self-contained HTML pages embedded in
//! the binary. Both drive the JSON API with client-side fetch calls.

use axum::response::Html;

/// Fault report submission form
///
/// GET /
pub async fn submit_page() -> Html<&'static str> {
    Html(include_str!("../../static/submit.html"))
}

/// Admin listing of all submitted reports
///
/// GET /admin
pub async fn admin_page() -> Html<&'static str> {
    Html(include_str!("../../static/admin.html"))
}
