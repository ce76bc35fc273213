use crate::domain::payment::PaymentError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct SuccessBody<T: Serialize> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

pub fn ok<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(SuccessBody {
            success: true,
            data,
        }),
    )
        .into_response()
}

/// Client-correctable payment errors become 400s carrying code and details;
/// everything else is logged and surfaced as a generic 500 so gateway
/// internals never leak to callers.
pub fn payment_error(err: PaymentError) -> Response {
    if err.is_client_error() {
        let body = ErrorBody {
            success: false,
            error: err.to_string(),
            code: Some(err.code().to_string()),
            details: err.details(),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    tracing::error!(code = err.code(), error = %err, details = ?err.details(), "payment request failed");
    internal_error()
}

pub fn passthrough_error(err: anyhow::Error) -> Response {
    tracing::error!("gateway passthrough failed: {err:#}");
    internal_error()
}

pub fn internal_error() -> Response {
    let body = ErrorBody {
        success: false,
        error: "Internal server error".to_string(),
        code: None,
        details: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

pub fn unauthorized() -> Response {
    let body = ErrorBody {
        success: false,
        error: "Invalid or missing API key".to_string(),
        code: None,
        details: None,
    };
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
