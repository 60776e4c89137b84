//! Cancellable quiet-period timer.

use std::future::pending;
use std::time::Duration;

use tokio::time::{sleep_until, Instant};

/// A restartable quiet-period timer. Arming (re)starts the window, so
/// only the final edit in a burst survives; the `expired` future resolves
/// once the window elapses and pends forever while the timer is disarmed,
/// which makes it safe to poll inside a `select!` loop.
#[derive(Debug)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        DebounceTimer {
            delay,
            deadline: None,
        }
    }

    /// Starts or restarts the quiet period.
    pub fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolves when the armed deadline passes; pends forever if unarmed.
    pub async fn expired(&self) {
        match self.deadline {
            Some(deadline) => sleep_until(deadline).await,
            None => pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    #[tokio::test(start_paused = true)]
    async fn fires_after_the_quiet_period() {
        let mut timer = DebounceTimer::new(Duration::from_millis(450));
        let start = Instant::now();

        timer.arm();
        timer.expired().await;

        assert!(start.elapsed() >= Duration::from_millis(450));
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_restarts_the_window() {
        let mut timer = DebounceTimer::new(Duration::from_millis(450));
        let start = Instant::now();

        timer.arm();
        advance(Duration::from_millis(300)).await;
        timer.arm();
        timer.expired().await;

        assert!(start.elapsed() >= Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_timer_never_fires() {
        let mut timer = DebounceTimer::new(Duration::from_millis(450));
        timer.arm();
        timer.cancel();

        assert!(!timer.is_armed());
        let fired = timeout(Duration::from_secs(5), timer.expired()).await;
        assert!(fired.is_err());
    }
}
