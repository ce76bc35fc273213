use crate::config::BackendConfig;
use crate::domain::application::CitizenApplication;
use crate::domain::payment::PaymentRequest;
use crate::gateways::{ApiClient, ServiceGateway};
use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// eCitizen portal client. Uses basic auth; payment bodies carry a SHA-256
/// integrity hash over the sorted request fields, as the portal requires.
#[derive(Clone)]
pub struct EcitizenGateway {
    client: ApiClient,
}

impl EcitizenGateway {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }
}

#[async_trait::async_trait]
impl ServiceGateway for EcitizenGateway {
    fn name(&self) -> &'static str {
        "ecitizen"
    }

    async fn available_services(&self) -> Result<Value> {
        self.client
            .get_json("/services")
            .await
            .context("failed to get available services")
    }

    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<Value> {
        let mut body = serde_json::to_value(request)?;
        let hash = secure_hash(&body);
        body.as_object_mut()
            .context("payment request did not serialize to an object")?
            .insert("hash".to_string(), Value::String(hash));

        self.client
            .post_json("/payment/initiate", &body)
            .await
            .context("failed to initiate payment")
    }

    async fn submit_application(&self, application: &CitizenApplication) -> Result<Value> {
        self.client
            .post_json("/application/submit", application)
            .await
            .context("failed to submit application")
    }

    async fn application_status(&self, application_id: &str) -> Result<Value> {
        self.client
            .get_json(&format!("/application/{application_id}/status"))
            .await
            .context("failed to get application status")
    }
}

/// SHA-256 hex digest over `key=value` pairs sorted by key, joined with `&`.
pub fn secure_hash(data: &Value) -> String {
    let mut pairs: Vec<(String, String)> = data
        .as_object()
        .map(|obj| {
            obj.iter()
                .map(|(k, v)| (k.clone(), render_hash_value(v)))
                .collect()
        })
        .unwrap_or_default();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(joined.as_bytes());
    format!("{digest:x}")
}

fn render_hash_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hash_is_deterministic_and_key_sorted() {
        let a = json!({"b": "2", "a": "1"});
        let b = json!({"a": "1", "b": "2"});
        assert_eq!(secure_hash(&a), secure_hash(&b));
        // sha256("a=1&b=2")
        assert_eq!(
            secure_hash(&a),
            "8e85be58c1c372ac29fe7bfa80d8ddcbd04a4032c7b51c1c026d67c55b1ab23f"
        );
    }

    #[test]
    fn whole_amounts_render_without_fraction() {
        let data = json!({"amount": 4550.0, "serviceId": "PASSPORT_RENEWAL"});
        let whole = secure_hash(&data);
        let int = secure_hash(&json!({"amount": 4550, "serviceId": "PASSPORT_RENEWAL"}));
        assert_eq!(whole, int);
    }
}
