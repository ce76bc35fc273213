use crate::http::respond;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Static API-key gate applied to every non-ops route.
pub async fn require_api_key(
    State(expected): State<String>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get("X-API-Key")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    if provided.is_empty() || provided != expected {
        return respond::unauthorized();
    }

    next.run(request).await
}
