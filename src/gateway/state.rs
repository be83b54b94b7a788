use crate::catalog::GatewayDescriptor;
use crate::domain::gateway::GatewayStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayRuntimeState {
    pub gateway_id: String,
    pub credentials: HashMap<String, String>,
    pub enabled: bool,
    pub test_mode: bool,
    pub status: GatewayStatus,
    pub last_tested: Option<chrono::DateTime<chrono::Utc>>,
}

impl GatewayRuntimeState {
    pub fn from_descriptor(descriptor: &GatewayDescriptor) -> Self {
        let credentials = descriptor
            .credential_schema
            .iter()
            .map(|field| (field.key.clone(), field.default_value.clone()))
            .collect();

        Self {
            gateway_id: descriptor.id.clone(),
            credentials,
            enabled: descriptor.default_enabled,
            test_mode: descriptor.default_test_mode,
            status: GatewayStatus::Inactive,
            last_tested: None,
        }
    }
}
