use std::time::Duration;

use rand::Rng;

/// Randomized wait between page actions.
///
/// A fixed stall, not a condition wait: nothing checks whether an
/// interstitial resolved while sleeping.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    min: Duration,
    max: Duration,
}

impl Pacer {
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn next_delay(&self) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        Duration::from_millis(rand::rng().random_range(min..=max))
    }

    pub async fn pause(&self) -> Duration {
        let delay = self.next_delay();
        tokio::time::sleep(delay).await;
        delay
    }
}
