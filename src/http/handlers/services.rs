use crate::http::respond;
use crate::AppState;
use axum::extract::State;
use axum::response::Response;

pub async fn list_services(State(state): State<AppState>) -> Response {
    match state.application_service.available_services().await {
        Ok(services) => respond::ok(services),
        Err(err) => respond::passthrough_error(err),
    }
}

pub async fn list_integrated_services(State(state): State<AppState>) -> Response {
    match state.profile_service.integrated_services().await {
        Ok(services) => respond::ok(services),
        Err(err) => respond::passthrough_error(err),
    }
}
