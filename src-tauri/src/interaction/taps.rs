use tokio::time::{Duration, Instant};

/// Counts a run of taps. Taps spaced within `window` of the previous one
/// extend the run; a longer gap starts a new run of one.
#[derive(Debug)]
pub struct TapTracker {
    window: Duration,
    run: u32,
    last_tap: Option<Instant>,
}

impl TapTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            run: 0,
            last_tap: None,
        }
    }

    /// Records a tap at `now` and returns the length of the current run.
    pub fn record(&mut self, now: Instant) -> u32 {
        match self.last_tap {
            Some(previous) if now.duration_since(previous) <= self.window => self.run += 1,
            _ => self.run = 1,
        }
        self.last_tap = Some(now);
        self.run
    }

    pub fn reset(&mut self) {
        self.run = 0;
        self.last_tap = None;
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::advance;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn run_grows_within_the_window() {
        let mut tracker = TapTracker::new(Duration::from_millis(400));
        assert_eq!(tracker.record(Instant::now()), 1);
        advance(Duration::from_millis(200)).await;
        assert_eq!(tracker.record(Instant::now()), 2);
        advance(Duration::from_millis(400)).await;
        assert_eq!(tracker.record(Instant::now()), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn gap_starts_a_fresh_run() {
        let mut tracker = TapTracker::new(Duration::from_millis(400));
        tracker.record(Instant::now());
        tracker.record(Instant::now());
        advance(Duration::from_millis(500)).await;
        assert_eq!(tracker.record(Instant::now()), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_clears_the_run() {
        let mut tracker = TapTracker::new(Duration::from_millis(400));
        tracker.record(Instant::now());
        tracker.record(Instant::now());
        tracker.reset();
        assert_eq!(tracker.record(Instant::now()), 1);
    }
}
