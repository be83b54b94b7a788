use crate::catalog::GatewayCatalog;
use crate::gateway::state::GatewayRuntimeState;
use crate::store::{KeyValueStore, StoreError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub mod settings;

pub const PAYMENT_CONFIG_KEY: &str = "payment_gateways";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("stored configuration under `{key}` is corrupted: {detail}")]
    Corrupted { key: String, detail: String },
    #[error("failed to encode configuration for `{key}`: {detail}")]
    Encode { key: String, detail: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug)]
pub struct LoadedConfig<T> {
    pub config: T,
    pub diagnostic: Option<ConfigError>,
}

pub fn merge_values(defaults: &Value, overrides: &Value) -> Value {
    match (defaults, overrides) {
        (Value::Object(base), Value::Object(over)) => {
            let mut merged = base.clone();
            for (key, value) in over {
                let entry = match base.get(key) {
                    Some(existing) => merge_values(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), entry);
            }
            Value::Object(merged)
        }
        (_, other) => other.clone(),
    }
}

pub fn load_merged<T>(store: &Arc<dyn KeyValueStore>, key: &str, defaults: &T) -> LoadedConfig<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("failed to read configuration `{}`, using defaults: {}", key, err);
            return LoadedConfig {
                config: defaults.clone(),
                diagnostic: Some(ConfigError::Store(err)),
            };
        }
    };

    let Some(raw) = raw else {
        return LoadedConfig {
            config: defaults.clone(),
            diagnostic: None,
        };
    };

    let stored: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("configuration `{}` failed to parse, using defaults: {}", key, err);
            return corrupted(key, &err.to_string(), defaults);
        }
    };

    if !stored.is_object() {
        tracing::warn!("configuration `{}` is not a JSON object, using defaults", key);
        return corrupted(key, "not a JSON object", defaults);
    }

    let default_value = serde_json::to_value(defaults).unwrap_or(Value::Null);
    let merged = merge_values(&default_value, &stored);
    match serde_json::from_value(merged) {
        Ok(config) => LoadedConfig {
            config,
            diagnostic: None,
        },
        Err(err) => {
            tracing::warn!(
                "configuration `{}` does not match the expected shape, using defaults: {}",
                key,
                err
            );
            corrupted(key, &err.to_string(), defaults)
        }
    }
}

pub fn save_merged<T>(
    store: &Arc<dyn KeyValueStore>,
    key: &str,
    defaults: &T,
    partial: &Value,
) -> Result<(), ConfigError>
where
    T: Clone + Serialize + DeserializeOwned,
{
    let current = load_merged(store, key, defaults).config;
    let current_value = serde_json::to_value(&current).unwrap_or(Value::Null);
    let merged = merge_values(&current_value, partial);
    let raw = serde_json::to_string(&merged).map_err(|err| ConfigError::Encode {
        key: key.to_string(),
        detail: err.to_string(),
    })?;
    store.set(key, &raw)?;
    Ok(())
}

fn corrupted<T: Clone>(key: &str, detail: &str, defaults: &T) -> LoadedConfig<T> {
    LoadedConfig {
        config: defaults.clone(),
        diagnostic: Some(ConfigError::Corrupted {
            key: key.to_string(),
            detail: detail.to_string(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    pub gateways: HashMap<String, GatewayRuntimeState>,
}

impl PaymentConfig {
    pub fn defaults(catalog: &GatewayCatalog) -> Self {
        let gateways = catalog
            .list()
            .iter()
            .map(|descriptor| {
                (
                    descriptor.id.clone(),
                    GatewayRuntimeState::from_descriptor(descriptor),
                )
            })
            .collect();
        Self { gateways }
    }
}

#[derive(Clone)]
pub struct PaymentConfigRepo {
    store: Arc<dyn KeyValueStore>,
    defaults: PaymentConfig,
}

impl PaymentConfigRepo {
    pub fn new(store: Arc<dyn KeyValueStore>, catalog: &GatewayCatalog) -> Self {
        Self {
            defaults: PaymentConfig::defaults(catalog),
            store,
        }
    }

    pub fn load(&self) -> LoadedConfig<PaymentConfig> {
        load_merged(&self.store, PAYMENT_CONFIG_KEY, &self.defaults)
    }

    pub fn save(&self, partial: &Value) -> Result<(), ConfigError> {
        save_merged(&self.store, PAYMENT_CONFIG_KEY, &self.defaults, partial)
    }

    pub fn save_gateway(&self, state: &GatewayRuntimeState) -> Result<(), ConfigError> {
        let state_value = serde_json::to_value(state).map_err(|err| ConfigError::Encode {
            key: PAYMENT_CONFIG_KEY.to_string(),
            detail: err.to_string(),
        })?;

        let mut gateways = serde_json::Map::new();
        gateways.insert(state.gateway_id.clone(), state_value);
        let mut root = serde_json::Map::new();
        root.insert("gateways".to_string(), Value::Object(gateways));
        self.save(&Value::Object(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn override_wins_per_leaf() {
        let defaults = json!({"a": 1, "b": {"c": 2, "d": 3}});
        let overrides = json!({"b": {"c": 9}});
        let merged = merge_values(&defaults, &overrides);
        assert_eq!(merged, json!({"a": 1, "b": {"c": 9, "d": 3}}));
    }

    #[test]
    fn missing_leaves_fall_back_to_defaults() {
        let defaults = json!({"a": 1, "b": 2});
        let overrides = json!({});
        assert_eq!(merge_values(&defaults, &overrides), defaults);
    }

    #[test]
    fn unknown_override_keys_are_kept() {
        let defaults = json!({"a": 1});
        let overrides = json!({"z": true});
        assert_eq!(merge_values(&defaults, &overrides), json!({"a": 1, "z": true}));
    }

    #[test]
    fn non_object_override_replaces_whole_value() {
        let defaults = json!({"a": {"b": 1}});
        let overrides = json!({"a": 7});
        assert_eq!(merge_values(&defaults, &overrides), json!({"a": 7}));
    }

    #[test]
    fn arrays_are_leaves_not_merged() {
        let defaults = json!({"a": [1, 2, 3]});
        let overrides = json!({"a": [9]});
        assert_eq!(merge_values(&defaults, &overrides), json!({"a": [9]}));
    }
}
