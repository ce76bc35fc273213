use crate::domain::application::CitizenApplication;
use crate::http::respond;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

pub async fn submit_application(
    State(state): State<AppState>,
    Json(application): Json<CitizenApplication>,
) -> Response {
    match state
        .application_service
        .submit_application(&application)
        .await
    {
        Ok(result) => respond::ok(result),
        Err(err) => respond::passthrough_error(err),
    }
}

pub async fn application_status(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Response {
    match state
        .application_service
        .application_status(&application_id)
        .await
    {
        Ok(result) => respond::ok(result),
        Err(err) => respond::passthrough_error(err),
    }
}
