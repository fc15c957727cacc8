use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cancellable one-shot timer driven by host-supplied elapsed time.
///
/// Every `arm` and `cancel` bumps the generation. Firing reports the
/// generation that fired so owners can drop a deadline they no longer expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OneShotTimer {
    remaining: Option<Duration>,
    generation: u64,
}

impl OneShotTimer {
    /// Arms (or re-arms) the timer and returns the new generation.
    pub fn arm(&mut self, delay: Duration) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.remaining = Some(delay);
        self.generation
    }

    pub fn cancel(&mut self) {
        if self.remaining.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    #[must_use]
    pub fn is_armed(self) -> bool {
        self.remaining.is_some()
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn remaining(self) -> Option<Duration> {
        self.remaining
    }

    /// Advances the clock; returns the fired generation exactly once when the
    /// deadline passes.
    pub fn advance(&mut self, elapsed: Duration) -> Option<u64> {
        match self.remaining {
            Some(remaining) if elapsed >= remaining => {
                self.remaining = None;
                Some(self.generation)
            }
            Some(remaining) => {
                self.remaining = Some(remaining - elapsed);
                None
            }
            None => None,
        }
    }

    /// Fires immediately if armed.
    pub fn fire_now(&mut self) -> Option<u64> {
        self.remaining.take().map(|_| self.generation)
    }
}

/// When viewport resizes trigger remeasurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizePolicy {
    Immediate,
    /// Remeasure once no resize arrived for `window_ms`.
    Debounced { window_ms: u64 },
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self::Debounced { window_ms: 500 }
    }
}

/// Trailing-edge resize debouncer: the last resize of a burst always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeDebouncer {
    policy: ResizePolicy,
    timer: OneShotTimer,
    armed: Option<u64>,
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(policy: ResizePolicy) -> Self {
        Self {
            policy,
            timer: OneShotTimer::default(),
            armed: None,
        }
    }

    #[must_use]
    pub fn policy(self) -> ResizePolicy {
        self.policy
    }

    /// Records a resize; returns `true` when remeasurement is due now.
    pub fn on_resize(&mut self) -> bool {
        match self.policy {
            ResizePolicy::Immediate => true,
            ResizePolicy::Debounced { window_ms } => {
                self.armed = Some(self.timer.arm(Duration::from_millis(window_ms)));
                false
            }
        }
    }

    /// Returns `true` once the debounce window of the latest resize elapsed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        match self.timer.advance(elapsed) {
            Some(generation) if self.armed == Some(generation) => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.timer.is_armed()
    }

    pub fn cancel(&mut self) {
        self.armed = None;
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{OneShotTimer, ResizeDebouncer, ResizePolicy};

    #[test]
    fn timer_fires_once() {
        let mut timer = OneShotTimer::default();
        let generation = timer.arm(Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(60)), None);
        assert_eq!(timer.advance(Duration::from_millis(40)), Some(generation));
        assert_eq!(timer.advance(Duration::from_millis(100)), None);
    }

    #[test]
    fn rearming_fires_only_the_latest_generation() {
        let mut timer = OneShotTimer::default();
        let first = timer.arm(Duration::from_millis(100));
        let second = timer.arm(Duration::from_millis(50));
        assert_ne!(first, second);
        assert_eq!(timer.fire_now(), Some(second));
        assert_eq!(timer.fire_now(), None);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = OneShotTimer::default();
        let generation = timer.arm(Duration::from_millis(10));
        timer.cancel();
        assert_ne!(timer.generation(), generation);
        assert_eq!(timer.advance(Duration::from_secs(1)), None);
        assert_eq!(timer.fire_now(), None);
    }

    #[test]
    fn burst_of_resizes_remeasures_after_the_last_one() {
        let mut debouncer = ResizeDebouncer::new(ResizePolicy::Debounced { window_ms: 500 });
        assert!(!debouncer.on_resize());
        assert!(!debouncer.advance(Duration::from_millis(400)));
        assert!(!debouncer.on_resize());
        assert!(!debouncer.advance(Duration::from_millis(400)));
        assert!(debouncer.advance(Duration::from_millis(100)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn immediate_policy_remeasures_every_time() {
        let mut debouncer = ResizeDebouncer::new(ResizePolicy::Immediate);
        assert!(debouncer.on_resize());
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancelled_debounce_never_remeasures() {
        let mut debouncer = ResizeDebouncer::new(ResizePolicy::Debounced { window_ms: 100 });
        debouncer.on_resize();
        debouncer.cancel();
        assert!(!debouncer.advance(Duration::from_secs(1)));
        assert!(!debouncer.is_pending());
    }
}
