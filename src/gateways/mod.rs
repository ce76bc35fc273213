use crate::config::BackendConfig;
use crate::domain::application::CitizenApplication;
use crate::domain::invoice::TaxInvoice;
use crate::domain::payment::PaymentRequest;
use anyhow::{Context, Result};
use serde_json::Value;

pub mod ecitizen;
pub mod etims;
pub mod gavaconnect;
pub mod mock;

/// Authentication capability injected into a gateway client, selected by
/// which credential fields are configured.
#[derive(Clone, Debug)]
pub enum AuthStrategy {
    /// `Authorization: Bearer <key>` plus `X-API-Key: <key>`.
    BearerApiKey(String),
    /// `Authorization: Basic base64(username:password)`.
    Basic { username: String, password: String },
    None,
}

impl AuthStrategy {
    pub fn from_config(config: &BackendConfig) -> Self {
        if let Some(key) = &config.api_key {
            return AuthStrategy::BearerApiKey(key.clone());
        }
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            return AuthStrategy::Basic {
                username: username.clone(),
                password: password.clone(),
            };
        }
        AuthStrategy::None
    }

    fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            AuthStrategy::BearerApiKey(key) => builder
                .header(reqwest::header::AUTHORIZATION, format!("Bearer {key}"))
                .header("X-API-Key", key),
            AuthStrategy::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            AuthStrategy::None => builder,
        }
    }
}

/// Shared HTTP plumbing for the government API clients: base url, auth
/// header injection, JSON accept/content headers, per-backend timeout.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    auth: AuthStrategy,
    timeout: std::time::Duration,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth: AuthStrategy::from_config(config),
            timeout: std::time::Duration::from_millis(config.timeout_ms),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let builder = self.client.get(format!("{}{}", self.base_url, path));
        self.send(builder).await
    }

    pub async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value> {
        let builder = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        self.send(builder).await
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Value> {
        let response = self
            .auth
            .apply(builder)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .context("request to gateway failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "gateway returned HTTP {}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            );
        }

        response
            .json::<Value>()
            .await
            .context("gateway returned non-JSON body")
    }
}

/// Capability the payment orchestrator needs from the citizen-services
/// backend. Raw JSON in and out; normalization happens in the orchestrator.
#[async_trait::async_trait]
pub trait ServiceGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn available_services(&self) -> Result<Value>;

    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<Value>;

    async fn submit_application(&self, application: &CitizenApplication) -> Result<Value>;

    async fn application_status(&self, application_id: &str) -> Result<Value>;
}

/// eTIMS invoice and taxpayer operations.
#[async_trait::async_trait]
pub trait TaxGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn taxpayer_info(&self, tin: &str) -> Result<Value>;

    async fn submit_invoice(&self, invoice: &TaxInvoice) -> Result<Value>;

    async fn invoice_status(&self, invoice_id: &str) -> Result<Value>;

    async fn tax_rates(&self) -> Result<Value>;
}

/// GavaConnect integrated-services operations.
#[async_trait::async_trait]
pub trait ProfileGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn user_profile(&self, user_id: &str) -> Result<Value>;

    async fn integrated_services(&self) -> Result<Value>;
}
