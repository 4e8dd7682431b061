use std::time::Duration;

use tokio::time::{sleep, Instant};

/// Keeps consecutive requests at least `min_interval` apart.
pub struct RequestPacer {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        RequestPacer {
            min_interval,
            last_request: None,
        }
    }

    /// Sleeps until the interval since the previous call has passed, then
    /// records now as the start of the next request.
    pub async fn wait_turn(&mut self) {
        if let Some(last_request) = self.last_request {
            let elapsed = last_request.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }

        self.last_request = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::RequestPacer;

    #[tokio::test(start_paused = true)]
    async fn first_request_is_not_delayed() {
        let mut pacer = RequestPacer::new(Duration::from_secs(1));
        let start = Instant::now();

        pacer.wait_turn().await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_requests_are_spaced() {
        let mut pacer = RequestPacer::new(Duration::from_secs(1));
        let start = Instant::now();

        pacer.wait_turn().await;
        pacer.wait_turn().await;
        pacer.wait_turn().await;

        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn time_already_spent_counts_toward_interval() {
        let mut pacer = RequestPacer::new(Duration::from_secs(1));

        pacer.wait_turn().await;
        tokio::time::sleep(Duration::from_millis(700)).await;
        let before = Instant::now();
        pacer.wait_turn().await;

        assert!(before.elapsed() >= Duration::from_millis(300));
        assert!(before.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_never_sleeps() {
        let mut pacer = RequestPacer::new(Duration::ZERO);
        let start = Instant::now();

        for _ in 0..5 {
            pacer.wait_turn().await;
        }

        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
