use crate::domain::invoice::TaxInvoice;
use crate::domain::payment::{PaymentError, PaymentRequest, PaymentSuccess};
use crate::gateways::ServiceGateway;
use crate::service::validation::{validate_payment, ValidationProfile};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentService {
    pub gateway: Arc<dyn ServiceGateway>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn ServiceGateway>) -> Self {
        Self { gateway }
    }

    /// Initiate a government-service payment: validate, confirm the service
    /// exists in the remote catalog, call the gateway, normalize the result.
    /// Validation strictly precedes any network call.
    pub async fn initiate(&self, request: PaymentRequest) -> Result<PaymentSuccess, PaymentError> {
        self.initiate_with_profile(request, ValidationProfile::Standard)
            .await
    }

    async fn initiate_with_profile(
        &self,
        request: PaymentRequest,
        profile: ValidationProfile,
    ) -> Result<PaymentSuccess, PaymentError> {
        let report = validate_payment(&request, profile);
        if !report.ok {
            return Err(PaymentError::Validation {
                errors: report.errors,
            });
        }

        // The catalog is refetched on every call; nothing caches it.
        let catalog = self
            .gateway
            .available_services()
            .await
            .map_err(wrap_remote_error)?;
        if !catalog_contains(&catalog, &request.service_id) {
            return Err(PaymentError::ServiceNotFound {
                service_id: request.service_id,
            });
        }

        let raw = self
            .gateway
            .initiate_payment(&request)
            .await
            .map_err(wrap_remote_error)?;

        normalize_gateway_response(&raw)
    }

    /// Pay for an eTIMS invoice by mapping it onto a synthetic payment
    /// request. Invoices carry no customer contact details, so the relaxed
    /// validation profile applies downstream.
    pub async fn pay_for_invoice(
        &self,
        invoice: &TaxInvoice,
    ) -> Result<PaymentSuccess, PaymentError> {
        if invoice.tin.trim().is_empty() {
            return Err(PaymentError::InvalidInvoice {
                reason: "tin is required".to_string(),
            });
        }
        if invoice.invoice_number.trim().is_empty() {
            return Err(PaymentError::InvalidInvoice {
                reason: "invoiceNumber is required".to_string(),
            });
        }
        if invoice.items.is_empty() {
            return Err(PaymentError::InvalidInvoice {
                reason: "invoice must have at least one line item".to_string(),
            });
        }

        let request = PaymentRequest {
            service_id: "ETIMS_PAYMENT".to_string(),
            amount: invoice.total_amount,
            currency: invoice.currency.clone(),
            customer_name: invoice.customer_name.clone(),
            customer_email: String::new(),
            customer_phone: String::new(),
            description: format!("Payment for eTIMS Invoice {}", invoice.invoice_number),
            reference_number: invoice.invoice_number.clone(),
        };

        self.initiate_with_profile(request, ValidationProfile::InvoiceOriginated)
            .await
            .map_err(|err| match err {
                PaymentError::InitiationFailed { details } => {
                    PaymentError::InvoicePaymentFailed { details }
                }
                other => other,
            })
    }
}

/// Classify the gateway's raw JSON response. Exhaustive: any status other
/// than SUCCESS/FAILED maps to `UnknownStatus`, never silently dropped.
pub fn normalize_gateway_response(raw: &Value) -> Result<PaymentSuccess, PaymentError> {
    if raw.is_null() {
        return Err(PaymentError::InvalidResponse);
    }

    match raw.get("status").and_then(Value::as_str) {
        Some("SUCCESS") => Ok(PaymentSuccess {
            transaction_id: raw
                .get("transactionId")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            payment_url: raw
                .get("paymentUrl")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            message: "Payment initiated successfully".to_string(),
        }),
        Some("FAILED") => Err(PaymentError::PaymentFailed {
            message: raw
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Payment initiation failed")
                .to_string(),
            details: raw.get("details").cloned(),
        }),
        _ => Err(PaymentError::UnknownStatus {
            details: raw.clone(),
        }),
    }
}

/// Transport and remote failures become `InitiationFailed`; errors that are
/// already orchestrator kinds pass through untouched.
fn wrap_remote_error(err: anyhow::Error) -> PaymentError {
    match err.downcast::<PaymentError>() {
        Ok(own) => own,
        Err(other) => PaymentError::InitiationFailed {
            details: format!("{other:#}"),
        },
    }
}

fn catalog_contains(catalog: &Value, service_id: &str) -> bool {
    let entries = catalog
        .as_array()
        .or_else(|| catalog.get("services").and_then(Value::as_array))
        .or_else(|| catalog.get("data").and_then(Value::as_array));

    entries
        .map(|list| {
            list.iter().any(|entry| {
                entry
                    .as_str()
                    .or_else(|| entry.get("id").and_then(Value::as_str))
                    == Some(service_id)
            })
        })
        .unwrap_or(false)
}
