use crate::domain::gateway::GatewayStatus;
use crate::gateway::state::GatewayRuntimeState;

pub fn begin_test(
    mut state: GatewayRuntimeState,
    now: chrono::DateTime<chrono::Utc>,
) -> GatewayRuntimeState {
    state.status = GatewayStatus::Pending;
    state.last_tested = Some(now);
    state
}

pub fn resolve_test(mut state: GatewayRuntimeState, healthy: bool) -> GatewayRuntimeState {
    state.status = if healthy {
        GatewayStatus::Active
    } else {
        GatewayStatus::Error
    };
    state
}
