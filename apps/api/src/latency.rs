use std::time::Duration;

use tracing::debug;

/// Artificial processing time in front of the mock "AI" endpoints.
/// The wait suspends only the current request; zero skips it entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    #[cfg(test)]
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if self.0.is_zero() {
            return;
        }
        debug!(delay_ms = self.0.as_millis() as u64, "simulating processing delay");
        tokio::time::sleep(self.0).await;
    }
}
