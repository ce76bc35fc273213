use crate::domain::invoice::TaxInvoice;
use crate::gateways::TaxGateway;
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

/// Thin passthrough over the eTIMS gateway.
#[derive(Clone)]
pub struct TaxService {
    pub gateway: Arc<dyn TaxGateway>,
}

impl TaxService {
    pub fn new(gateway: Arc<dyn TaxGateway>) -> Self {
        Self { gateway }
    }

    pub async fn submit_tax_invoice(&self, invoice: &TaxInvoice) -> Result<Value> {
        self.gateway
            .submit_invoice(invoice)
            .await
            .context("failed to submit tax invoice")
    }

    pub async fn taxpayer_information(&self, tin: &str) -> Result<Value> {
        self.gateway
            .taxpayer_info(tin)
            .await
            .context("failed to get taxpayer information")
    }

    pub async fn invoice_status(&self, invoice_id: &str) -> Result<Value> {
        self.gateway
            .invoice_status(invoice_id)
            .await
            .context("failed to get invoice status")
    }

    pub async fn tax_rates(&self) -> Result<Value> {
        self.gateway.tax_rates().await.context("failed to get tax rates")
    }
}
