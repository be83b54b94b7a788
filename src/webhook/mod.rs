use crate::catalog::GatewayCatalog;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

pub const WEBHOOK_EVENTS: [&str; 3] = ["payment.success", "payment.failed", "refund.processed"];

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("unknown gateway: {0}")]
    UnknownGateway(String),
}

/// Informational contract for one gateway's callback endpoint. No inbound
/// receiver exists in this core; this is what the admin screen shows the
/// operator to paste into the provider dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookEndpoint {
    pub gateway_id: String,
    pub url: String,
    pub method: &'static str,
    pub format: &'static str,
    pub events: Vec<&'static str>,
}

pub struct WebhookDirectory {
    catalog: Arc<GatewayCatalog>,
    base_url: String,
}

impl WebhookDirectory {
    pub fn new(catalog: Arc<GatewayCatalog>, base_url: &str) -> Self {
        Self {
            catalog,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn webhook_url(&self, gateway_id: &str) -> Result<String, WebhookError> {
        if !self.catalog.contains(gateway_id) {
            return Err(WebhookError::UnknownGateway(gateway_id.to_string()));
        }
        Ok(format!("{}/api/webhooks/{}", self.base_url, gateway_id))
    }

    pub fn endpoint(&self, gateway_id: &str) -> Result<WebhookEndpoint, WebhookError> {
        Ok(WebhookEndpoint {
            gateway_id: gateway_id.to_string(),
            url: self.webhook_url(gateway_id)?,
            method: "POST",
            format: "JSON",
            events: WEBHOOK_EVENTS.to_vec(),
        })
    }

    pub fn all_endpoints(&self) -> Vec<WebhookEndpoint> {
        self.catalog
            .list()
            .iter()
            .filter_map(|d| self.endpoint(&d.id).ok())
            .collect()
    }
}
