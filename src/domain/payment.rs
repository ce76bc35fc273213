use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payment initiation request for an eCitizen government service.
/// Field names follow the upstream API's camelCase wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub service_id: String,
    pub amount: f64,
    pub currency: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub description: String,
    pub reference_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccess {
    pub transaction_id: Option<String>,
    pub payment_url: Option<String>,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Invalid payment data")]
    Validation { errors: Vec<String> },
    #[error("Service not found: {service_id}")]
    ServiceNotFound { service_id: String },
    #[error("Invalid invoice data: {reason}")]
    InvalidInvoice { reason: String },
    #[error("Failed to initiate payment")]
    InitiationFailed { details: String },
    #[error("Failed to process eTIMS invoice payment")]
    InvoicePaymentFailed { details: String },
    #[error("{message}")]
    PaymentFailed {
        message: String,
        details: Option<Value>,
    },
    #[error("Invalid response from payment gateway")]
    InvalidResponse,
    #[error("Unknown payment status")]
    UnknownStatus { details: Value },
}

impl PaymentError {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentError::Validation { .. } => "VALIDATION_ERROR",
            PaymentError::ServiceNotFound { .. } => "SERVICE_NOT_FOUND",
            PaymentError::InvalidInvoice { .. } => "INVALID_INVOICE",
            PaymentError::InitiationFailed { .. } => "PAYMENT_INITIATION_FAILED",
            PaymentError::InvoicePaymentFailed { .. } => "ETIMS_PAYMENT_FAILED",
            PaymentError::PaymentFailed { .. } => "PAYMENT_FAILED",
            PaymentError::InvalidResponse => "INVALID_RESPONSE",
            PaymentError::UnknownStatus { .. } => "UNKNOWN_STATUS",
        }
    }

    /// Caller-correctable failures; everything else is surfaced as a
    /// generic internal error at the HTTP boundary.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PaymentError::Validation { .. }
                | PaymentError::ServiceNotFound { .. }
                | PaymentError::InvalidInvoice { .. }
        )
    }

    pub fn details(&self) -> Option<Value> {
        match self {
            PaymentError::Validation { errors } => Some(Value::from(errors.clone())),
            PaymentError::InitiationFailed { details }
            | PaymentError::InvoicePaymentFailed { details } => {
                Some(Value::String(details.clone()))
            }
            PaymentError::PaymentFailed { details, .. } => details.clone(),
            PaymentError::UnknownStatus { details } => Some(details.clone()),
            _ => None,
        }
    }
}
