use crate::cart::Cart;
use crate::catalog::CategoryGroup;
use crate::domain::checkout::{AttemptPhase, CheckoutAttempt};
use crate::domain::gateway::GatewayCategory;
use crate::gateway::GatewayRegistry;
use crate::settlement::{SettlementRequest, SettlementRouter};
use std::sync::Arc;
use thiserror::Error;

pub const PAYMENT_FAILED_MESSAGE: &str = "Payment failed. Please try again.";

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("unknown gateway: {0}")]
    UnknownGateway(String),
    #[error("gateway is not enabled: {0}")]
    GatewayNotEnabled(String),
    #[error("settlement failed for gateway {gateway}")]
    SettlementFailed {
        gateway: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Clone)]
pub struct CheckoutOrchestrator {
    registry: GatewayRegistry,
    router: Arc<SettlementRouter>,
    cart: Arc<dyn Cart>,
}

impl CheckoutOrchestrator {
    pub fn new(registry: GatewayRegistry, router: Arc<SettlementRouter>, cart: Arc<dyn Cart>) -> Self {
        Self { registry, router, cart }
    }

    /// Customer-facing selection set: enabled gateways only, grouped by
    /// category in canonical order, declaration order within a category.
    pub async fn payment_options(&self) -> Vec<CategoryGroup> {
        let enabled = self.registry.enabled_descriptors().await;
        GatewayCategory::CANONICAL_ORDER
            .iter()
            .filter_map(|&category| {
                let gateways: Vec<_> = enabled
                    .iter()
                    .filter(|d| d.category == category)
                    .cloned()
                    .collect();
                if gateways.is_empty() {
                    None
                } else {
                    Some(CategoryGroup {
                        category,
                        title: category.display_name().to_string(),
                        gateways,
                    })
                }
            })
            .collect()
    }

    /// Runs one checkout attempt to a terminal state. Validation failures
    /// (unknown or disabled gateway) reject before any processing state is
    /// entered; settlement failures come back as a `Failed` attempt with a
    /// generic user message, detail logged. The cart is cleared on success
    /// only.
    ///
    /// There is no cancel path: once processing begins the attempt runs to a
    /// terminal state.
    pub async fn process(&self, gateway_id: &str) -> Result<CheckoutAttempt, CheckoutError> {
        let state = self
            .registry
            .state(gateway_id)
            .await
            .map_err(|_| CheckoutError::UnknownGateway(gateway_id.to_string()))?;
        if !state.enabled {
            return Err(CheckoutError::GatewayNotEnabled(gateway_id.to_string()));
        }

        // Amount is frozen here; later cart mutation does not touch the attempt.
        let snapshot = self.cart.snapshot();
        let mut attempt = CheckoutAttempt::new(
            gateway_id,
            snapshot.grand_total_minor,
            &snapshot.currency,
            state.test_mode,
        );

        attempt.phase = AttemptPhase::Processing;
        tracing::info!(
            "checkout attempt {} processing via {} for {} {}",
            attempt.attempt_id,
            gateway_id,
            attempt.amount_minor,
            attempt.currency
        );

        match self.settle(&attempt).await {
            Ok(transaction_ref) => {
                attempt.phase = AttemptPhase::Succeeded;
                attempt.user_message = format!(
                    "Payment of {} {} completed via {}.",
                    format_minor(attempt.amount_minor),
                    attempt.currency,
                    display_name_for(&self.registry, gateway_id)
                );
                attempt.transaction_ref = Some(transaction_ref);
                self.cart.clear();
                tracing::info!("checkout attempt {} succeeded", attempt.attempt_id);
            }
            Err(err) => {
                attempt.phase = AttemptPhase::Failed;
                attempt.user_message = PAYMENT_FAILED_MESSAGE.to_string();
                tracing::warn!("checkout attempt {} failed: {:#}", attempt.attempt_id, err);
            }
        }

        Ok(attempt)
    }

    async fn settle(&self, attempt: &CheckoutAttempt) -> Result<String, CheckoutError> {
        let gateway = self.router.route(&attempt.gateway_id).ok_or_else(|| {
            CheckoutError::SettlementFailed {
                gateway: attempt.gateway_id.clone(),
                source: anyhow::anyhow!("no settlement routine registered"),
            }
        })?;

        let request = SettlementRequest {
            attempt_id: attempt.attempt_id,
            gateway_id: attempt.gateway_id.clone(),
            amount_minor: attempt.amount_minor,
            currency: attempt.currency.clone(),
            test_mode: attempt.test_mode,
        };

        let receipt = gateway
            .settle(&request)
            .await
            .map_err(|source| CheckoutError::SettlementFailed {
                gateway: attempt.gateway_id.clone(),
                source,
            })?;
        Ok(receipt.transaction_ref)
    }
}

fn display_name_for(registry: &GatewayRegistry, gateway_id: &str) -> String {
    registry
        .catalog()
        .get(gateway_id)
        .map(|d| d.display_name.clone())
        .unwrap_or_else(|| gateway_id.to_string())
}

fn format_minor(amount_minor: i64) -> String {
    format!("{}.{:02}", amount_minor / 100, amount_minor % 100)
}
