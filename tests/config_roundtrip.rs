use serde_json::json;
use std::sync::Arc;
use storefront_payments::catalog::GatewayCatalog;
use storefront_payments::config::settings::{SettingsRepo, SETTINGS_KEY};
use storefront_payments::config::{ConfigError, PaymentConfigRepo, PAYMENT_CONFIG_KEY};
use storefront_payments::store::{KeyValueStore, MemoryStore};

fn payment_repo(store: Arc<dyn KeyValueStore>) -> PaymentConfigRepo {
    PaymentConfigRepo::new(store, &GatewayCatalog::with_defaults())
}

#[test]
fn empty_save_is_a_no_op_round_trip() {
    let repo = payment_repo(Arc::new(MemoryStore::new()));

    let before = repo.load().config;
    repo.save(&json!({})).unwrap();
    let after = repo.load().config;
    assert_eq!(before, after);
}

#[test]
fn empty_settings_update_is_a_no_op_round_trip() {
    let repo = SettingsRepo::new(Arc::new(MemoryStore::new()));

    let before = repo.load().config;
    repo.update(&json!({})).unwrap();
    let after = repo.load().config;
    assert_eq!(before, after);
}

#[test]
fn corrupted_blob_falls_back_to_defaults_with_a_diagnostic() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    store.set(PAYMENT_CONFIG_KEY, "{ not json").unwrap();

    let repo = payment_repo(store.clone());
    let loaded = repo.load();
    assert!(matches!(loaded.diagnostic, Some(ConfigError::Corrupted { .. })));

    let pristine = payment_repo(Arc::new(MemoryStore::new())).load().config;
    assert_eq!(loaded.config, pristine);
}

#[test]
fn non_object_blob_is_treated_as_corrupted() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    store.set(SETTINGS_KEY, "\"just a string\"").unwrap();

    let loaded = SettingsRepo::new(store).load();
    assert!(matches!(loaded.diagnostic, Some(ConfigError::Corrupted { .. })));
    assert_eq!(loaded.config.site_name, "NoMadWorx");
}

#[test]
fn partial_update_overrides_only_the_named_leaves() {
    let repo = SettingsRepo::new(Arc::new(MemoryStore::new()));

    repo.update(&json!({
        "site_name": "NoMadWorx Studio",
        "shipping_rates": { "domestic_minor": 2_000 }
    }))
    .unwrap();

    let settings = repo.load().config;
    assert_eq!(settings.site_name, "NoMadWorx Studio");
    assert_eq!(settings.shipping_rates.domestic_minor, 2_000);
    // Untouched leaves keep their defaults.
    assert_eq!(settings.shipping_rates.international_minor, 4_500);
    assert_eq!(settings.contact_email, "info@nomadworx.com");
}

#[test]
fn missing_leaves_in_an_old_blob_fall_back_to_defaults() {
    // A blob written before new settings fields existed.
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    store.set(SETTINGS_KEY, r#"{"site_name":"Old Name"}"#).unwrap();

    let settings = SettingsRepo::new(store).load().config;
    assert_eq!(settings.site_name, "Old Name");
    assert_eq!(settings.currency, "USD");
    assert!(settings.email_notifications);
}

#[test]
fn saving_one_gateway_leaves_the_others_at_defaults() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let repo = payment_repo(store);

    repo.save(&json!({
        "gateways": { "stripe": { "enabled": true } }
    }))
    .unwrap();

    let config = repo.load().config;
    assert!(config.gateways["stripe"].enabled);

    let pristine = payment_repo(Arc::new(MemoryStore::new())).load().config;
    assert_eq!(config.gateways["razorpay"], pristine.gateways["razorpay"]);
    assert_eq!(config.gateways["paytm"], pristine.gateways["paytm"]);
}

#[test]
fn payment_and_settings_namespaces_do_not_bleed() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let settings = SettingsRepo::new(store.clone());
    let payments = payment_repo(store.clone());

    settings.update(&json!({"site_name": "Changed"})).unwrap();
    payments
        .save(&json!({"gateways": {"stripe": {"enabled": true}}}))
        .unwrap();

    assert_eq!(settings.load().config.site_name, "Changed");
    assert!(payments.load().config.gateways["stripe"].enabled);

    let raw_settings = store.get(SETTINGS_KEY).unwrap().unwrap();
    assert!(!raw_settings.contains("stripe"));
}
