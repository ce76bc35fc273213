use crate::domain::invoice::TaxInvoice;
use crate::http::respond;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

pub async fn submit_invoice(
    State(state): State<AppState>,
    Json(invoice): Json<TaxInvoice>,
) -> Response {
    match state.tax_service.submit_tax_invoice(&invoice).await {
        Ok(result) => respond::ok(result),
        Err(err) => respond::passthrough_error(err),
    }
}

pub async fn invoice_status(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Response {
    match state.tax_service.invoice_status(&invoice_id).await {
        Ok(result) => respond::ok(result),
        Err(err) => respond::passthrough_error(err),
    }
}

pub async fn tax_rates(State(state): State<AppState>) -> Response {
    match state.tax_service.tax_rates().await {
        Ok(result) => respond::ok(result),
        Err(err) => respond::passthrough_error(err),
    }
}

pub async fn taxpayer_info(State(state): State<AppState>, Path(tin): Path<String>) -> Response {
    match state.tax_service.taxpayer_information(&tin).await {
        Ok(result) => respond::ok(result),
        Err(err) => respond::passthrough_error(err),
    }
}
