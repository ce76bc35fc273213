use crate::config::BackendConfig;
use crate::domain::invoice::TaxInvoice;
use crate::gateways::{ApiClient, TaxGateway};
use anyhow::{Context, Result};
use serde_json::Value;

/// eTIMS (Electronic Tax Invoice Management System) client. Bearer + X-API-Key.
#[derive(Clone)]
pub struct EtimsGateway {
    client: ApiClient,
}

impl EtimsGateway {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }
}

#[async_trait::async_trait]
impl TaxGateway for EtimsGateway {
    fn name(&self) -> &'static str {
        "etims"
    }

    async fn taxpayer_info(&self, tin: &str) -> Result<Value> {
        self.client
            .get_json(&format!("/taxpayer/{tin}"))
            .await
            .context("failed to get taxpayer info")
    }

    async fn submit_invoice(&self, invoice: &TaxInvoice) -> Result<Value> {
        self.client
            .post_json("/invoice/submit", invoice)
            .await
            .context("failed to submit invoice")
    }

    async fn invoice_status(&self, invoice_id: &str) -> Result<Value> {
        self.client
            .get_json(&format!("/invoice/{invoice_id}/status"))
            .await
            .context("failed to get invoice status")
    }

    async fn tax_rates(&self) -> Result<Value> {
        self.client
            .get_json("/tax-rates")
            .await
            .context("failed to get tax rates")
    }
}
