use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Log every inbound request before it is routed.
///
/// Each request gets a fresh correlation id; handlers log their own domain
/// events under the same `event_name` discipline.
pub async fn log_request(request: Request, next: Next) -> Response {
    info!(
        event_name = "http.request",
        correlation_id = %Uuid::new_v4().simple(),
        timestamp = %Utc::now().to_rfc3339(),
        method = %request.method(),
        path = %request.uri(),
        "inbound http request"
    );

    next.run(request).await
}
