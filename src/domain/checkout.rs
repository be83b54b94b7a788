use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptPhase {
    Created,
    Processing,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutAttempt {
    pub attempt_id: Uuid,
    pub gateway_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub test_mode: bool,
    pub phase: AttemptPhase,
    pub transaction_ref: Option<String>,
    pub user_message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl CheckoutAttempt {
    pub fn new(gateway_id: &str, amount_minor: i64, currency: &str, test_mode: bool) -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            gateway_id: gateway_id.to_string(),
            amount_minor,
            currency: currency.to_string(),
            test_mode,
            phase: AttemptPhase::Created,
            transaction_ref: None,
            user_message: String::new(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn outcome(&self) -> AttemptOutcome {
        match self.phase {
            AttemptPhase::Created | AttemptPhase::Processing => AttemptOutcome::Pending,
            AttemptPhase::Succeeded => AttemptOutcome::Succeeded,
            AttemptPhase::Failed => AttemptOutcome::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, AttemptPhase::Succeeded | AttemptPhase::Failed)
    }
}
