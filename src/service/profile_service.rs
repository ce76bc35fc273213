use crate::gateways::ProfileGateway;
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

/// Thin passthrough over the GavaConnect gateway.
#[derive(Clone)]
pub struct ProfileService {
    pub gateway: Arc<dyn ProfileGateway>,
}

impl ProfileService {
    pub fn new(gateway: Arc<dyn ProfileGateway>) -> Self {
        Self { gateway }
    }

    pub async fn user_profile(&self, user_id: &str) -> Result<Value> {
        self.gateway
            .user_profile(user_id)
            .await
            .context("failed to get user profile")
    }

    pub async fn integrated_services(&self) -> Result<Value> {
        self.gateway
            .integrated_services()
            .await
            .context("failed to get integrated services")
    }
}
