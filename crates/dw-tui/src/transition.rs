//! Fixed-duration visual transitions driven by the event loop tick.

use std::time::{Duration, Instant};

/// A transition that started at a known instant and lasts a fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    started: Instant,
    duration: Duration,
}

impl Transition {
    /// Start a transition at `now`.
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            duration,
        }
    }

    /// Fraction complete in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the transition has run its full duration.
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_from_zero_to_one() {
        let t0 = Instant::now();
        let t = Transition::start(t0, Duration::from_millis(800));
        assert_eq!(t.progress(t0), 0.0);
        assert!((t.progress(t0 + Duration::from_millis(400)) - 0.5).abs() < 1e-9);
        assert_eq!(t.progress(t0 + Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn done_after_duration() {
        let t0 = Instant::now();
        let t = Transition::start(t0, Duration::from_millis(500));
        assert!(!t.is_done(t0 + Duration::from_millis(499)));
        assert!(t.is_done(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let t0 = Instant::now();
        let t = Transition::start(t0, Duration::ZERO);
        assert!(t.is_done(t0));
        assert_eq!(t.progress(t0), 1.0);
    }
}
