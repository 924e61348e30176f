use std::time::Duration;
use tokio::time::Instant;

/// Enforces a minimum delay between consecutive requests to the host.
/// Held by the fetcher as an explicit value rather than ambient sleep state.
#[derive(Debug)]
pub struct RateLimiter {
    min_delay: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last_request: None,
        }
    }

    /// Sleep until at least `min_delay` has passed since the previous call,
    /// then mark the current request.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}
