use crate::catalog::GatewayCatalog;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub mod simulated;

#[derive(Debug, Clone)]
pub struct SettlementRequest {
    pub attempt_id: Uuid,
    pub gateway_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub test_mode: bool,
}

#[derive(Debug, Clone)]
pub struct SettlementReceipt {
    pub transaction_ref: String,
}

#[async_trait::async_trait]
pub trait SettlementGateway: Send + Sync {
    fn name(&self) -> &str;

    async fn settle(&self, request: &SettlementRequest) -> Result<SettlementReceipt>;
}

/// Dispatch table keyed by gateway id. Adding a provider is one `register`
/// call; the orchestrator never branches on ids itself.
#[derive(Default)]
pub struct SettlementRouter {
    routes: HashMap<String, Arc<dyn SettlementGateway>>,
}

impl SettlementRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, gateway_id: &str, gateway: Arc<dyn SettlementGateway>) {
        self.routes.insert(gateway_id.to_string(), gateway);
    }

    pub fn route(&self, gateway_id: &str) -> Option<Arc<dyn SettlementGateway>> {
        self.routes.get(gateway_id).cloned()
    }

    /// Every catalog entry wired to the simulated adapter. A real deployment
    /// would register provider-specific adapters here instead.
    pub fn simulated_for_catalog(catalog: &GatewayCatalog) -> Self {
        let adapter: Arc<dyn SettlementGateway> =
            Arc::new(simulated::SimulatedSettlement::default());
        let mut router = Self::new();
        for descriptor in catalog.list() {
            router.register(&descriptor.id, adapter.clone());
        }
        router
    }
}
