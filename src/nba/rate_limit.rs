//! Token bucket pacing for outbound provider calls.

use std::time::Duration;

use tokio::time::{sleep, Instant};

/// Token bucket refilled at one token per `interval`, holding at most `capacity`.
///
/// A fresh limiter starts full, so the first `capacity` calls proceed
/// immediately and later ones are spaced `interval` apart.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    capacity: f64,
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// One call per `interval`, no burst.
    pub fn new(interval: Duration) -> Self {
        Self::with_capacity(interval, 1)
    }

    pub fn with_capacity(interval: Duration, capacity: u32) -> Self {
        let capacity = f64::from(capacity.max(1));
        Self {
            interval,
            capacity,
            tokens: capacity,
            last_refill: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until a token is available and take it.
    pub async fn acquire(&mut self) {
        if self.interval.is_zero() {
            return;
        }

        self.refill();
        if self.tokens < 1.0 {
            sleep(self.interval.mul_f64(1.0 - self.tokens)).await;
            self.refill();
        }
        self.tokens = (self.tokens - 1.0).max(0.0);
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);
        self.last_refill = now;
        let earned = elapsed.as_secs_f64() / self.interval.as_secs_f64();
        self.tokens = (self.tokens + earned).min(self.capacity);
    }
}
