#[async_trait::async_trait]
pub trait ConnectivityProbe: Send + Sync {
    async fn check(&self, gateway_id: &str) -> bool;
}

pub struct SimulatedProbe {
    pub delay: std::time::Duration,
    pub success_rate: f64,
}

impl Default for SimulatedProbe {
    fn default() -> Self {
        Self {
            delay: std::time::Duration::from_millis(2000),
            success_rate: 0.8,
        }
    }
}

#[async_trait::async_trait]
impl ConnectivityProbe for SimulatedProbe {
    async fn check(&self, _gateway_id: &str) -> bool {
        tokio::time::sleep(self.delay).await;
        let draw: f64 = rand::random();
        draw < self.success_rate
    }
}
