use crate::domain::application::CitizenApplication;
use crate::domain::payment::PaymentRequest;
use crate::gateways::ServiceGateway;
use anyhow::Result;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory service gateway used by tests and local runs. Behavior strings
/// mirror the remote statuses; call counters let tests assert which remote
/// operations a flow actually performed.
pub struct MockServiceGateway {
    pub catalog: Value,
    pub behavior: String,
    pub catalog_calls: Arc<AtomicUsize>,
    pub initiate_calls: Arc<AtomicUsize>,
}

impl MockServiceGateway {
    pub fn new(catalog: Value, behavior: &str) -> Self {
        Self {
            catalog,
            behavior: behavior.to_string(),
            catalog_calls: Arc::new(AtomicUsize::new(0)),
            initiate_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_service_ids(ids: &[&str], behavior: &str) -> Self {
        let services: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
        Self::new(Value::Array(services), behavior)
    }
}

#[async_trait::async_trait]
impl ServiceGateway for MockServiceGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn available_services(&self) -> Result<Value> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.catalog.clone())
    }

    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<Value> {
        self.initiate_calls.fetch_add(1, Ordering::SeqCst);
        let response = match self.behavior.as_str() {
            "ALWAYS_FAILED" => json!({
                "status": "FAILED",
                "message": "mock decline",
                "details": { "referenceNumber": request.reference_number },
            }),
            "ALWAYS_UNKNOWN" => json!({ "status": "PROCESSING" }),
            "NULL_RESPONSE" => Value::Null,
            "TRANSPORT_ERROR" => {
                anyhow::bail!("mock transport error")
            }
            _ => json!({
                "status": "SUCCESS",
                "transactionId": format!("mock_txn_{}", uuid::Uuid::new_v4()),
                "paymentUrl": format!("https://pay.mock/{}", request.reference_number),
            }),
        };
        Ok(response)
    }

    async fn submit_application(&self, application: &CitizenApplication) -> Result<Value> {
        Ok(json!({
            "id": format!("app_{}", uuid::Uuid::new_v4()),
            "status": "RECEIVED",
            "serviceId": application.service_id,
        }))
    }

    async fn application_status(&self, application_id: &str) -> Result<Value> {
        Ok(json!({ "id": application_id, "status": "PENDING" }))
    }
}
