use crate::domain::invoice::TaxInvoice;
use crate::domain::payment::PaymentRequest;
use crate::http::respond;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub async fn initiate_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Response {
    match state.payment_service.initiate(request).await {
        Ok(outcome) => respond::ok(outcome),
        Err(err) => respond::payment_error(err),
    }
}

pub async fn pay_etims_invoice(
    State(state): State<AppState>,
    Json(invoice): Json<TaxInvoice>,
) -> Response {
    match state.payment_service.pay_for_invoice(&invoice).await {
        Ok(outcome) => respond::ok(outcome),
        Err(err) => respond::payment_error(err),
    }
}

// TODO: wire up a real status lookup once eCitizen exposes one; the
// upstream portal has no payment-status endpoint today.
pub async fn payment_status(Path(reference_number): Path<String>) -> impl IntoResponse {
    respond::ok(json!({
        "referenceNumber": reference_number,
        "status": "PENDING",
        "message": "Payment status check not implemented yet",
    }))
}
