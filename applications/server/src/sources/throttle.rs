//! Request pacing for rate-limited upstream APIs

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Spaces upstream requests at least `1 / rate` seconds apart
///
/// Callers queue on the inner lock, so concurrent searches are served in
/// arrival order.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    next_slot: Mutex<Instant>,
}

impl Throttle {
    /// Allow at most `rate` requests per second (a rate of 0 is treated as 1)
    pub fn per_second(rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / rate.max(1),
            next_slot: Mutex::new(Instant::now()),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next request slot is free and claim it
    pub async fn acquire(&self) {
        let mut next_slot = self.next_slot.lock().await;
        let now = Instant::now();
        if *next_slot > now {
            tokio::time::sleep_until(*next_slot).await;
        }
        *next_slot = (*next_slot).max(now) + self.interval;
    }
}
