use crate::settlement::{SettlementGateway, SettlementReceipt, SettlementRequest};
use anyhow::{bail, Result};
use std::time::Duration;

/// Stand-in for a real provider SDK: waits out a processing delay, then
/// succeeds with a fixed probability. No money moves.
pub struct SimulatedSettlement {
    pub delay: Duration,
    pub success_rate: f64,
}

impl Default for SimulatedSettlement {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(2000),
            success_rate: 0.9,
        }
    }
}

#[async_trait::async_trait]
impl SettlementGateway for SimulatedSettlement {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn settle(&self, request: &SettlementRequest) -> Result<SettlementReceipt> {
        tokio::time::sleep(self.delay).await;

        let draw: f64 = rand::random();
        if draw >= self.success_rate {
            bail!(
                "simulated decline for gateway {} (amount {} {})",
                request.gateway_id,
                request.amount_minor,
                request.currency
            );
        }

        Ok(SettlementReceipt {
            transaction_ref: format!("sim_txn_{}", uuid::Uuid::new_v4()),
        })
    }
}
