use crate::http::respond;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;

pub async fn user_profile(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    match state.profile_service.user_profile(&user_id).await {
        Ok(profile) => respond::ok(profile),
        Err(err) => respond::passthrough_error(err),
    }
}
