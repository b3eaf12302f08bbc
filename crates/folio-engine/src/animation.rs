//! Eased divider animation as an explicit timed-step state machine.
//!
//! An [`Animation`] is created with a start value, a target and a start
//! time, then sampled once per frame. The sample at or after
//! `start + duration` lands exactly on the target and marks the
//! animation finished.

use std::time::Duration;

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// One sample of a running animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub position: f64,
    pub finished: bool,
}

/// A scripted move from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f64,
    to: f64,
    started_at: Duration,
    duration: Duration,
}

impl Animation {
    pub fn new(from: f64, to: f64, started_at: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Sample the eased position at `now`.
    pub fn sample(&self, now: Duration) -> Step {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return Step {
                position: self.to,
                finished: true,
            };
        }
        Step {
            position: self.from + (self.to - self.from) * ease_out_cubic(progress),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_ease_out_cubic_shape() {
        assert!(ease_out_cubic(0.0).abs() < 1e-12);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-12);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        // Ease-out runs ahead of linear
        assert!(ease_out_cubic(0.25) > 0.25);
    }

    #[test]
    fn test_sample_progression() {
        let anim = Animation::new(48.0, 53.0, ms(1000), ms(300));

        let start = anim.sample(ms(1000));
        assert!((start.position - 48.0).abs() < 1e-9);
        assert!(!start.finished);

        let mid = anim.sample(ms(1150));
        assert!((mid.position - (48.0 + 5.0 * 0.875)).abs() < 1e-9);
        assert!(!mid.finished);

        let end = anim.sample(ms(1300));
        assert!((end.position - 53.0).abs() < f64::EPSILON);
        assert!(end.finished);
    }

    #[test]
    fn test_late_sample_clamps_to_target() {
        let anim = Animation::new(93.0, 100.0, ms(0), ms(300));
        let step = anim.sample(ms(5000));
        assert!((step.position - 100.0).abs() < f64::EPSILON);
        assert!(step.finished);
    }

    #[test]
    fn test_sample_before_start_stays_at_origin() {
        let anim = Animation::new(10.0, 0.0, ms(500), ms(300));
        let step = anim.sample(ms(100));
        assert!((step.position - 10.0).abs() < f64::EPSILON);
        assert!(!step.finished);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let anim = Animation::new(20.0, 50.0, ms(0), Duration::ZERO);
        let step = anim.sample(ms(0));
        assert!(step.finished);
        assert!((step.position - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_positions_are_monotonic() {
        let anim = Animation::new(0.0, 100.0, ms(0), ms(300));
        let mut last = anim.sample(ms(0)).position;
        for t in (16..=320).step_by(16) {
            let next = anim.sample(ms(t)).position;
            assert!(next >= last);
            last = next;
        }
    }
}
