use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Keeps a minimum spacing between consecutive requests to the directory
pub struct RateLimiter {
    delay: Duration,
    last_request: Option<Instant>,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_request: None,
            request_count: 0,
        }
    }

    /// Wait until the next request is allowed, then record it
    pub async fn wait(&mut self) {
        if let Some(ready_at) = self.next_slot() {
            sleep_until(ready_at).await;
        }
        self.record();
    }

    pub fn request_count(&self) -> usize {
        self.request_count
    }

    fn next_slot(&self) -> Option<Instant> {
        self.last_request.map(|last| last + self.delay)
    }

    fn record(&mut self) {
        self.last_request = Some(Instant::now());
        self.request_count += 1;
    }
}
