use crate::config::BackendConfig;
use crate::gateways::{ApiClient, ProfileGateway};
use anyhow::{Context, Result};
use serde_json::Value;

/// GavaConnect integrated government services client. Bearer + X-API-Key.
#[derive(Clone)]
pub struct GavaConnectGateway {
    client: ApiClient,
}

impl GavaConnectGateway {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }
}

#[async_trait::async_trait]
impl ProfileGateway for GavaConnectGateway {
    fn name(&self) -> &'static str {
        "gavaconnect"
    }

    async fn user_profile(&self, user_id: &str) -> Result<Value> {
        self.client
            .get_json(&format!("/user/{user_id}/profile"))
            .await
            .context("failed to get user profile")
    }

    async fn integrated_services(&self) -> Result<Value> {
        self.client
            .get_json("/services/integrated")
            .await
            .context("failed to get integrated services")
    }
}
