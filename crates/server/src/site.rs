use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

/// Landing page plus static asset fallback.
///
/// The dashboard page is compiled into the binary so the server works without
/// any files on disk; everything else under the assets directory is served
/// as-is.
pub fn router(assets_directory: &str) -> Router {
    Router::new().route("/", get(landing_page)).fallback_service(ServeDir::new(assets_directory))
}

async fn landing_page() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}
