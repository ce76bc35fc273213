use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Electronic tax invoice submitted to eTIMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInvoice {
    pub tin: String,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_tin: Option<String>,
    pub items: Vec<LineItem>,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub currency: String,
}

/// Line totals are taken as supplied; the upstream API is the arithmetic
/// authority and nothing here recomputes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub tax_rate: f64,
    pub total_amount: f64,
}
