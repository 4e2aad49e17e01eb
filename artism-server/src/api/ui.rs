//! UI serving routes
//!
//! Serves the static HTML/JS browsing page for artists and movements

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../ui/index.html");

/// GET /
///
/// Serves the main browsing page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
