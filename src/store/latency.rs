use std::time::Duration;

/// Artificial delay applied before every store call, emulating a remote API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Latency {
    /// Resolve immediately.
    Off,
    /// Per-operation delays of the mock API (150-300 ms).
    #[default]
    Simulated,
    /// The same delay for every operation.
    Fixed(Duration),
}

impl Latency {
    pub fn delay_for(self, nominal_ms: u64) -> Duration {
        match self {
            Latency::Off => Duration::ZERO,
            Latency::Simulated => Duration::from_millis(nominal_ms),
            Latency::Fixed(delay) => delay,
        }
    }

    pub async fn wait(self, nominal_ms: u64) {
        let delay = self.delay_for(nominal_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
