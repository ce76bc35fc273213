use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

/// Best-effort reachability probe of the three backends. Any failure is
/// downgraded to a per-backend `false`; this endpoint never errors.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let etims = state.tax_service.tax_rates().await.is_ok();
    let ecitizen = state.application_service.available_services().await.is_ok();
    let gavaconnect = state.profile_service.integrated_services().await.is_ok();

    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "data": {
                "etims": etims,
                "ecitizen": ecitizen,
                "gavaconnect": gavaconnect,
            }
        })),
    )
        .into_response()
}

pub async fn liveness() -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(serde_json::json!({"alive": true}))).into_response()
}
