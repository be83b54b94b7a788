use crate::catalog::{GatewayCatalog, GatewayDescriptor};
use crate::config::{PaymentConfig, PaymentConfigRepo};
use crate::domain::gateway::GatewayStatus;
use crate::gateway::probe::ConnectivityProbe;
use crate::gateway::state::GatewayRuntimeState;
use crate::gateway::transitions::{begin_test, resolve_test};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

pub mod probe;
pub mod state;
pub mod transitions;

#[derive(Debug, Error)]
pub enum GatewayConfigError {
    #[error("unknown gateway: {0}")]
    UnknownGateway(String),
    #[error("unknown credential field `{field}` for gateway `{gateway}`")]
    UnknownField { gateway: String, field: String },
    #[error("connection test already in progress for gateway: {0}")]
    TestAlreadyInProgress(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    pub enabled: usize,
    pub enabled_test_mode: usize,
    pub average_fee_percentage: f64,
}

struct RegistryInner {
    states: HashMap<String, GatewayRuntimeState>,
    tests_in_flight: HashSet<String>,
}

#[derive(Clone)]
pub struct GatewayRegistry {
    catalog: Arc<GatewayCatalog>,
    repo: PaymentConfigRepo,
    probe: Arc<dyn ConnectivityProbe>,
    inner: Arc<RwLock<RegistryInner>>,
}

impl GatewayRegistry {
    pub fn new(
        catalog: Arc<GatewayCatalog>,
        initial: PaymentConfig,
        repo: PaymentConfigRepo,
        probe: Arc<dyn ConnectivityProbe>,
    ) -> Self {
        let mut states = initial.gateways;
        for descriptor in catalog.list() {
            states
                .entry(descriptor.id.clone())
                .or_insert_with(|| GatewayRuntimeState::from_descriptor(descriptor));
        }

        Self {
            catalog,
            repo,
            probe,
            inner: Arc::new(RwLock::new(RegistryInner {
                states,
                tests_in_flight: HashSet::new(),
            })),
        }
    }

    pub fn catalog(&self) -> &GatewayCatalog {
        &self.catalog
    }

    fn descriptor(&self, gateway_id: &str) -> Result<&GatewayDescriptor, GatewayConfigError> {
        self.catalog
            .get(gateway_id)
            .ok_or_else(|| GatewayConfigError::UnknownGateway(gateway_id.to_string()))
    }

    pub async fn state(&self, gateway_id: &str) -> Result<GatewayRuntimeState, GatewayConfigError> {
        self.descriptor(gateway_id)?;
        let inner = self.inner.read().await;
        inner
            .states
            .get(gateway_id)
            .cloned()
            .ok_or_else(|| GatewayConfigError::UnknownGateway(gateway_id.to_string()))
    }

    pub async fn all_states(&self) -> HashMap<String, GatewayRuntimeState> {
        self.inner.read().await.states.clone()
    }

    pub async fn credentials(
        &self,
        gateway_id: &str,
    ) -> Result<HashMap<String, String>, GatewayConfigError> {
        Ok(self.state(gateway_id).await?.credentials)
    }

    pub async fn set_field(
        &self,
        gateway_id: &str,
        field_key: &str,
        value: &str,
    ) -> Result<(), GatewayConfigError> {
        let descriptor = self.descriptor(gateway_id)?;
        if descriptor.field(field_key).is_none() {
            return Err(GatewayConfigError::UnknownField {
                gateway: gateway_id.to_string(),
                field: field_key.to_string(),
            });
        }

        self.update_state(gateway_id, |state| {
            state
                .credentials
                .insert(field_key.to_string(), value.to_string());
        })
        .await?;
        Ok(())
    }

    pub async fn set_enabled(
        &self,
        gateway_id: &str,
        enabled: bool,
    ) -> Result<(), GatewayConfigError> {
        self.update_state(gateway_id, |state| {
            state.enabled = enabled;
        })
        .await?;
        Ok(())
    }

    pub async fn set_test_mode(
        &self,
        gateway_id: &str,
        test_mode: bool,
    ) -> Result<(), GatewayConfigError> {
        self.update_state(gateway_id, |state| {
            state.test_mode = test_mode;
        })
        .await?;
        Ok(())
    }

    pub async fn test_connection(
        &self,
        gateway_id: &str,
    ) -> Result<GatewayStatus, GatewayConfigError> {
        self.descriptor(gateway_id)?;
        let now = chrono::Utc::now();

        let pending = {
            let mut inner = self.inner.write().await;
            let inner = &mut *inner;
            if inner.tests_in_flight.contains(gateway_id) {
                return Err(GatewayConfigError::TestAlreadyInProgress(
                    gateway_id.to_string(),
                ));
            }
            let state = inner
                .states
                .get_mut(gateway_id)
                .ok_or_else(|| GatewayConfigError::UnknownGateway(gateway_id.to_string()))?;
            *state = begin_test(state.clone(), now);
            inner.tests_in_flight.insert(gateway_id.to_string());
            state.clone()
        };
        self.persist(&pending);
        tracing::info!("connection test started for gateway {}", gateway_id);

        let healthy = self.probe.check(gateway_id).await;

        let resolved = {
            let mut inner = self.inner.write().await;
            inner.tests_in_flight.remove(gateway_id);
            match inner.states.get_mut(gateway_id) {
                Some(state) => {
                    *state = resolve_test(state.clone(), healthy);
                    Some(state.clone())
                }
                None => None,
            }
        };

        match resolved {
            Some(state) => {
                self.persist(&state);
                if state.status == GatewayStatus::Error {
                    tracing::warn!("connection test failed for gateway {}", gateway_id);
                } else {
                    tracing::info!("connection test passed for gateway {}", gateway_id);
                }
                Ok(state.status)
            }
            None => Err(GatewayConfigError::UnknownGateway(gateway_id.to_string())),
        }
    }

    pub async fn enabled_descriptors(&self) -> Vec<GatewayDescriptor> {
        let inner = self.inner.read().await;
        self.catalog
            .list()
            .iter()
            .filter(|descriptor| {
                inner
                    .states
                    .get(&descriptor.id)
                    .is_some_and(|state| state.enabled)
            })
            .cloned()
            .collect()
    }

    pub async fn stats(&self) -> RegistryStats {
        let inner = self.inner.read().await;
        let mut enabled = 0;
        let mut enabled_test_mode = 0;
        let mut fee_bp_sum: i64 = 0;

        for descriptor in self.catalog.list() {
            if let Some(state) = inner.states.get(&descriptor.id) {
                if state.enabled {
                    enabled += 1;
                    fee_bp_sum += descriptor.fees.percentage_bp;
                    if state.test_mode {
                        enabled_test_mode += 1;
                    }
                }
            }
        }

        let average_fee_percentage = if enabled > 0 {
            fee_bp_sum as f64 / enabled as f64 / 100.0
        } else {
            0.0
        };

        RegistryStats {
            total: self.catalog.len(),
            enabled,
            enabled_test_mode,
            average_fee_percentage,
        }
    }

    async fn update_state<F>(
        &self,
        gateway_id: &str,
        apply: F,
    ) -> Result<GatewayRuntimeState, GatewayConfigError>
    where
        F: FnOnce(&mut GatewayRuntimeState),
    {
        self.descriptor(gateway_id)?;
        let updated = {
            let mut inner = self.inner.write().await;
            let state = inner
                .states
                .get_mut(gateway_id)
                .ok_or_else(|| GatewayConfigError::UnknownGateway(gateway_id.to_string()))?;
            apply(state);
            state.clone()
        };
        self.persist(&updated);
        Ok(updated)
    }

    fn persist(&self, state: &GatewayRuntimeState) {
        if let Err(err) = self.repo.save_gateway(state) {
            tracing::warn!("failed to persist gateway {}: {}", state.gateway_id, err);
        }
    }
}
