use crate::domain::application::CitizenApplication;
use crate::gateways::ServiceGateway;
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

/// Thin passthrough over the eCitizen application operations.
#[derive(Clone)]
pub struct ApplicationService {
    pub gateway: Arc<dyn ServiceGateway>,
}

impl ApplicationService {
    pub fn new(gateway: Arc<dyn ServiceGateway>) -> Self {
        Self { gateway }
    }

    pub async fn submit_application(&self, application: &CitizenApplication) -> Result<Value> {
        self.gateway
            .submit_application(application)
            .await
            .context("failed to submit application")
    }

    pub async fn application_status(&self, application_id: &str) -> Result<Value> {
        self.gateway
            .application_status(application_id)
            .await
            .context("failed to get application status")
    }

    pub async fn available_services(&self) -> Result<Value> {
        self.gateway
            .available_services()
            .await
            .context("failed to get available services")
    }
}
