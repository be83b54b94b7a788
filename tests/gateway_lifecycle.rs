use std::sync::Arc;
use storefront_payments::catalog::GatewayCatalog;
use storefront_payments::config::PaymentConfigRepo;
use storefront_payments::domain::gateway::GatewayStatus;
use storefront_payments::gateway::probe::ConnectivityProbe;
use storefront_payments::gateway::{GatewayConfigError, GatewayRegistry};
use storefront_payments::store::{KeyValueStore, MemoryStore};
use tokio::sync::Notify;

struct ScriptedProbe {
    healthy: bool,
    // Holds probes for this gateway id open until the gate is notified.
    gate: Option<(String, Arc<Notify>)>,
}

#[async_trait::async_trait]
impl ConnectivityProbe for ScriptedProbe {
    async fn check(&self, gateway_id: &str) -> bool {
        if let Some((gated_id, gate)) = &self.gate {
            if gated_id == gateway_id {
                gate.notified().await;
            }
        }
        self.healthy
    }
}

fn registry_on(store: Arc<dyn KeyValueStore>, probe: ScriptedProbe) -> GatewayRegistry {
    let catalog = Arc::new(GatewayCatalog::with_defaults());
    let repo = PaymentConfigRepo::new(store, &catalog);
    let initial = repo.load().config;
    GatewayRegistry::new(catalog, initial, repo, Arc::new(probe))
}

fn registry(probe: ScriptedProbe) -> GatewayRegistry {
    registry_on(Arc::new(MemoryStore::new()), probe)
}

fn healthy() -> ScriptedProbe {
    ScriptedProbe { healthy: true, gate: None }
}

#[tokio::test]
async fn set_field_rejects_unknown_gateway_and_field() {
    let registry = registry(healthy());

    let err = registry.set_field("nope", "keyId", "x").await.unwrap_err();
    assert!(matches!(err, GatewayConfigError::UnknownGateway(_)));

    let err = registry.set_field("razorpay", "nope", "x").await.unwrap_err();
    assert!(matches!(err, GatewayConfigError::UnknownField { .. }));
}

#[tokio::test]
async fn set_field_preserves_sibling_fields() {
    let registry = registry(healthy());

    registry.set_field("razorpay", "keyId", "rzp_live_1").await.unwrap();
    registry.set_field("razorpay", "keySecret", "s3cret").await.unwrap();
    registry.set_field("razorpay", "keyId", "rzp_live_2").await.unwrap();

    let credentials = registry.credentials("razorpay").await.unwrap();
    assert_eq!(credentials.get("keyId").map(String::as_str), Some("rzp_live_2"));
    assert_eq!(credentials.get("keySecret").map(String::as_str), Some("s3cret"));
}

#[tokio::test]
async fn set_field_commutes_across_distinct_keys() {
    let a_then_b = registry(healthy());
    a_then_b.set_field("payu", "merchantId", "m1").await.unwrap();
    a_then_b.set_field("payu", "merchantKey", "k1").await.unwrap();

    let b_then_a = registry(healthy());
    b_then_a.set_field("payu", "merchantKey", "k1").await.unwrap();
    b_then_a.set_field("payu", "merchantId", "m1").await.unwrap();

    assert_eq!(
        a_then_b.credentials("payu").await.unwrap(),
        b_then_a.credentials("payu").await.unwrap()
    );
}

#[tokio::test]
async fn test_connection_resolves_active_and_stamps_last_tested() {
    let registry = registry(healthy());

    let status = registry.test_connection("razorpay").await.unwrap();
    assert_eq!(status, GatewayStatus::Active);

    let state = registry.state("razorpay").await.unwrap();
    assert_eq!(state.status, GatewayStatus::Active);
    assert!(state.last_tested.is_some());
}

#[tokio::test]
async fn test_connection_resolves_error_on_unhealthy_probe() {
    let registry = registry(ScriptedProbe { healthy: false, gate: None });

    let status = registry.test_connection("razorpay").await.unwrap();
    assert_eq!(status, GatewayStatus::Error);
    assert_eq!(
        registry.state("razorpay").await.unwrap().status,
        GatewayStatus::Error
    );
}

#[tokio::test]
async fn test_connection_rejects_unknown_gateway() {
    let registry = registry(healthy());
    assert!(matches!(
        registry.test_connection("nope").await,
        Err(GatewayConfigError::UnknownGateway(_))
    ));
}

#[tokio::test]
async fn test_connection_is_allowed_while_disabled() {
    // Connectivity and customer visibility are independent axes.
    let registry = registry(healthy());
    registry.set_enabled("razorpay", false).await.unwrap();

    let status = registry.test_connection("razorpay").await.unwrap();
    assert_eq!(status, GatewayStatus::Active);
}

#[tokio::test]
async fn enablement_toggles_never_touch_status() {
    let registry = registry(healthy());
    registry.test_connection("razorpay").await.unwrap();

    registry.set_enabled("razorpay", false).await.unwrap();
    let state = registry.state("razorpay").await.unwrap();
    assert!(!state.enabled);
    assert_eq!(state.status, GatewayStatus::Active);

    registry.set_test_mode("razorpay", true).await.unwrap();
    let state = registry.state("razorpay").await.unwrap();
    assert!(state.test_mode);
    assert_eq!(state.status, GatewayStatus::Active);
}

#[tokio::test]
async fn second_test_while_pending_is_rejected() {
    let gate = Arc::new(Notify::new());
    let registry = registry(ScriptedProbe {
        healthy: true,
        gate: Some(("razorpay".to_string(), gate.clone())),
    });

    let in_flight = {
        let registry = registry.clone();
        tokio::spawn(async move { registry.test_connection("razorpay").await })
    };

    // Wait for the first call to park in the probe.
    loop {
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        if registry.state("razorpay").await.unwrap().status == GatewayStatus::Pending {
            break;
        }
    }

    assert!(matches!(
        registry.test_connection("razorpay").await,
        Err(GatewayConfigError::TestAlreadyInProgress(_))
    ));

    // Pending on gateway A never blocks gateway B.
    let status = registry.test_connection("paypal").await.unwrap();
    assert_eq!(status, GatewayStatus::Active);

    gate.notify_one();
    let status = in_flight.await.unwrap().unwrap();
    assert_eq!(status, GatewayStatus::Active);

    // The in-flight flag is released once the test resolves.
    gate.notify_one();
    assert!(registry.test_connection("razorpay").await.is_ok());
}

#[tokio::test]
async fn last_tested_is_frozen_once_pending() {
    let gate = Arc::new(Notify::new());
    let registry = registry(ScriptedProbe {
        healthy: true,
        gate: Some(("razorpay".to_string(), gate.clone())),
    });

    let in_flight = {
        let registry = registry.clone();
        tokio::spawn(async move { registry.test_connection("razorpay").await })
    };

    let stamped = loop {
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let state = registry.state("razorpay").await.unwrap();
        if state.status == GatewayStatus::Pending {
            break state.last_tested;
        }
    };
    assert!(stamped.is_some());

    gate.notify_one();
    in_flight.await.unwrap().unwrap();
    assert_eq!(registry.state("razorpay").await.unwrap().last_tested, stamped);
}

#[tokio::test]
async fn retest_from_terminal_status_is_allowed() {
    let registry = registry(healthy());
    assert_eq!(registry.test_connection("razorpay").await.unwrap(), GatewayStatus::Active);
    assert_eq!(registry.test_connection("razorpay").await.unwrap(), GatewayStatus::Active);
}

#[tokio::test]
async fn stats_track_enablement_and_test_mode() {
    let registry = registry(healthy());

    let before = registry.stats().await;
    assert_eq!(before.total, 14);

    registry.set_enabled("stripe", true).await.unwrap();
    registry.set_test_mode("stripe", true).await.unwrap();

    let after = registry.stats().await;
    assert_eq!(after.enabled, before.enabled + 1);
    assert_eq!(after.enabled_test_mode, before.enabled_test_mode + 1);
    assert!(after.average_fee_percentage > 0.0);
}

#[tokio::test]
async fn mutations_survive_a_reload_from_the_same_store() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    let first = registry_on(store.clone(), healthy());
    first.set_enabled("stripe", true).await.unwrap();
    first.set_field("stripe", "secretKey", "sk_live_1").await.unwrap();
    first.test_connection("stripe").await.unwrap();

    let second = registry_on(store, healthy());
    let state = second.state("stripe").await.unwrap();
    assert!(state.enabled);
    assert_eq!(state.credentials.get("secretKey").map(String::as_str), Some("sk_live_1"));
    assert_eq!(state.status, GatewayStatus::Active);
    assert!(state.last_tested.is_some());
}
