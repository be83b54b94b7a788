pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod domain {
    pub mod admin;
    pub mod cart;
    pub mod checkout;
    pub mod gateway;
}
pub mod gateway;
pub mod settlement;
pub mod store;
pub mod webhook;

use crate::auth::AdminAuthService;
use crate::cart::Cart;
use crate::catalog::GatewayCatalog;
use crate::checkout::CheckoutOrchestrator;
use crate::config::settings::SettingsRepo;
use crate::config::PaymentConfigRepo;
use crate::gateway::probe::{ConnectivityProbe, SimulatedProbe};
use crate::gateway::GatewayRegistry;
use crate::settlement::SettlementRouter;
use crate::store::KeyValueStore;
use std::sync::Arc;

/// One wired instance of the storefront core: catalog, gateway registry,
/// checkout orchestrator, site settings, admin auth, and webhook directory,
/// all sharing a single durable store.
#[derive(Clone)]
pub struct StorefrontCore {
    pub catalog: Arc<GatewayCatalog>,
    pub registry: GatewayRegistry,
    pub checkout: CheckoutOrchestrator,
    pub settings: SettingsRepo,
    pub auth: AdminAuthService,
    pub webhooks: Arc<webhook::WebhookDirectory>,
}

impl StorefrontCore {
    /// Default wiring: seeded catalog, simulated probe, simulated settlement
    /// for every gateway.
    pub fn new(store: Arc<dyn KeyValueStore>, cart: Arc<dyn Cart>, base_url: &str) -> Self {
        let catalog = Arc::new(GatewayCatalog::with_defaults());
        let router = Arc::new(SettlementRouter::simulated_for_catalog(&catalog));
        Self::with_parts(store, cart, base_url, catalog, router, Arc::new(SimulatedProbe::default()))
    }

    /// Wiring with injectable probe and settlement table, for tests and hosts
    /// that bring their own adapters.
    pub fn with_parts(
        store: Arc<dyn KeyValueStore>,
        cart: Arc<dyn Cart>,
        base_url: &str,
        catalog: Arc<GatewayCatalog>,
        router: Arc<SettlementRouter>,
        probe: Arc<dyn ConnectivityProbe>,
    ) -> Self {
        let repo = PaymentConfigRepo::new(store.clone(), &catalog);
        let loaded = repo.load();
        if let Some(diagnostic) = &loaded.diagnostic {
            tracing::warn!("payment configuration fell back to defaults: {}", diagnostic);
        }

        let registry = GatewayRegistry::new(catalog.clone(), loaded.config, repo, probe);
        let checkout = CheckoutOrchestrator::new(registry.clone(), router, cart);

        Self {
            webhooks: Arc::new(webhook::WebhookDirectory::new(catalog.clone(), base_url)),
            settings: SettingsRepo::new(store.clone()),
            auth: AdminAuthService::new(store),
            catalog,
            registry,
            checkout,
        }
    }
}
