use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::RowKey;
use crate::interaction::OneShotTimer;

/// Element id carried by the highlighted row's bar cell.
pub const HIGHLIGHTED_ELEMENT_ID: &str = "comparison-bar-chart-highlighted-item";

pub const DEFAULT_SCROLL_SETTLE_DELAY_MS: u64 = 350;

/// Rendered rows shorter than this count as collapsed.
pub const DEFAULT_MIN_LAID_OUT_ROW_HEIGHT_PX: f64 = 1.0;

/// What the host reports about the highlighted row's element.
#[derive(Debug, Clone, PartialEq)]
pub enum RowElementState {
    /// The id exists in neither dataset.
    Unknown,
    /// The id exists but no element is currently instantiated.
    NotRendered { key: RowKey },
    /// The element exists with the given rendered height.
    Rendered { key: RowKey, height_px: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Request for the host to scroll a row into view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub key: RowKey,
    pub element_id: String,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    #[must_use]
    pub fn smooth(key: RowKey) -> Self {
        Self {
            key,
            element_id: HIGHLIGHTED_ELEMENT_ID.to_owned(),
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Outcome of locating a highlighted row.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightDecision {
    /// The chart must expand to reveal the row.
    pub expand: bool,
    /// Scroll to issue right away.
    pub scroll_target: Option<ScrollRequest>,
    /// A scroll must follow once the reveal transition settles.
    pub deferred_scroll: bool,
    /// The id is absent from both datasets.
    pub not_found: bool,
}

/// Decides how to bring a highlighted row into view.
#[must_use]
pub fn reconcile_highlight(element: RowElementState, min_laid_out_height_px: f64) -> HighlightDecision {
    match element {
        RowElementState::Unknown => HighlightDecision {
            expand: false,
            scroll_target: None,
            deferred_scroll: false,
            not_found: true,
        },
        RowElementState::Rendered { key, height_px } if height_px >= min_laid_out_height_px => {
            HighlightDecision {
                expand: false,
                scroll_target: Some(ScrollRequest::smooth(key)),
                deferred_scroll: false,
                not_found: false,
            }
        }
        RowElementState::Rendered { .. } | RowElementState::NotRendered { .. } => {
            HighlightDecision {
                expand: true,
                scroll_target: None,
                deferred_scroll: true,
                not_found: false,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightPhase {
    Idle,
    Locating { id: String },
    /// `generation` is the settle timer arm this scroll waits for.
    ScrollPending { key: RowKey, generation: u64 },
    Settled { key: RowKey },
}

/// Scroll-into-view state machine for the `highlighted` prop.
///
/// A pending scroll is keyed to the current target through the timer
/// generation: it only fires for the arm that created it, and a new target
/// or `dispose` cancels it.
#[derive(Debug, Clone)]
pub struct HighlightReconciler {
    phase: HighlightPhase,
    timer: OneShotTimer,
    settle_delay: Duration,
    min_laid_out_height_px: f64,
}

impl Default for HighlightReconciler {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_SCROLL_SETTLE_DELAY_MS),
            DEFAULT_MIN_LAID_OUT_ROW_HEIGHT_PX,
        )
    }
}

impl HighlightReconciler {
    #[must_use]
    pub fn new(settle_delay: Duration, min_laid_out_height_px: f64) -> Self {
        Self {
            phase: HighlightPhase::Idle,
            timer: OneShotTimer::default(),
            settle_delay,
            min_laid_out_height_px,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &HighlightPhase {
        &self.phase
    }

    #[must_use]
    pub fn has_pending_scroll(&self) -> bool {
        matches!(self.phase, HighlightPhase::ScrollPending { .. }) && self.timer.is_armed()
    }

    /// Starts locating `id`, dropping any scroll pending for a previous id.
    pub fn begin(&mut self, id: &str) {
        self.cancel_pending();
        self.phase = HighlightPhase::Locating { id: id.to_owned() };
    }

    /// Clears the highlight entirely.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.phase = HighlightPhase::Idle;
    }

    /// Feeds the located element state and advances the machine.
    pub fn resolve(&mut self, element: RowElementState) -> HighlightDecision {
        let key = match &element {
            RowElementState::NotRendered { key } | RowElementState::Rendered { key, .. } => {
                Some(key.clone())
            }
            RowElementState::Unknown => None,
        };
        let decision = reconcile_highlight(element, self.min_laid_out_height_px);

        match key {
            None => self.phase = HighlightPhase::Idle,
            Some(key) if decision.deferred_scroll => {
                let generation = self.timer.arm(self.settle_delay);
                debug!(id = %key.id, generation, "deferred highlight scroll armed");
                self.phase = HighlightPhase::ScrollPending { key, generation };
            }
            Some(key) => self.phase = HighlightPhase::Settled { key },
        }
        decision
    }

    /// Layout transition finished: a pending scroll fires now.
    pub fn on_transition_end(&mut self) -> Option<ScrollRequest> {
        self.timer
            .fire_now()
            .and_then(|generation| self.settle(generation))
    }

    /// Fallback clock: a pending scroll fires once the settle delay passed.
    pub fn advance(&mut self, elapsed: Duration) -> Option<ScrollRequest> {
        self.timer
            .advance(elapsed)
            .and_then(|generation| self.settle(generation))
    }

    /// Teardown: nothing may fire afterwards.
    pub fn dispose(&mut self) {
        self.clear();
    }

    fn settle(&mut self, fired: u64) -> Option<ScrollRequest> {
        let HighlightPhase::ScrollPending { key, generation } = &self.phase else {
            return None;
        };
        if *generation != fired {
            debug!(id = %key.id, fired, expected = *generation, "stale highlight timer ignored");
            return None;
        }
        let key = key.clone();
        debug!(id = %key.id, generation = fired, "deferred highlight scroll fired");
        self.phase = HighlightPhase::Settled { key: key.clone() };
        Some(ScrollRequest::smooth(key))
    }

    fn cancel_pending(&mut self) {
        if self.timer.is_armed() {
            debug!("cancelling superseded highlight scroll");
        }
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{HighlightPhase, HighlightReconciler, RowElementState};
    use crate::core::{RowKey, Side};

    #[test]
    fn laid_out_row_scrolls_immediately() {
        let mut machine = HighlightReconciler::default();
        machine.begin("a");
        let decision = machine.resolve(RowElementState::Rendered {
            key: RowKey::new(Side::Primary, "a"),
            height_px: 24.0,
        });
        assert!(!decision.expand);
        assert!(decision.scroll_target.is_some());
        assert!(matches!(machine.phase(), HighlightPhase::Settled { .. }));
    }

    #[test]
    fn collapsed_row_defers_until_transition_end() {
        let mut machine = HighlightReconciler::default();
        machine.begin("a");
        let decision = machine.resolve(RowElementState::Rendered {
            key: RowKey::new(Side::Secondary, "a"),
            height_px: 0.0,
        });
        assert!(decision.expand && decision.deferred_scroll);
        assert!(machine.has_pending_scroll());

        let request = machine.on_transition_end().expect("scroll fires");
        assert_eq!(request.key.side, Side::Secondary);
        assert!(machine.advance(Duration::from_secs(5)).is_none());
    }

    #[test]
    fn superseded_target_cancels_the_pending_scroll() {
        let mut machine = HighlightReconciler::default();
        machine.begin("a");
        machine.resolve(RowElementState::NotRendered {
            key: RowKey::new(Side::Primary, "a"),
        });
        machine.begin("b");
        assert!(machine.advance(Duration::from_secs(5)).is_none());
        assert!(matches!(machine.phase(), HighlightPhase::Locating { .. }));
    }

    #[test]
    fn rearmed_scroll_fires_for_the_latest_target_only() {
        let mut machine = HighlightReconciler::default();
        machine.begin("a");
        machine.resolve(RowElementState::NotRendered {
            key: RowKey::new(Side::Primary, "a"),
        });
        let HighlightPhase::ScrollPending { generation: first, .. } = *machine.phase() else {
            panic!("expected a pending scroll");
        };
        machine.begin("b");
        machine.resolve(RowElementState::NotRendered {
            key: RowKey::new(Side::Primary, "b"),
        });
        let HighlightPhase::ScrollPending { generation: second, .. } = *machine.phase() else {
            panic!("expected a pending scroll");
        };
        assert_ne!(first, second);

        let request = machine.advance(Duration::from_secs(5)).expect("scroll fires");
        assert_eq!(request.key.id, "b");
        assert!(machine.advance(Duration::from_secs(5)).is_none());
    }

    #[test]
    fn unknown_id_returns_to_idle() {
        let mut machine = HighlightReconciler::default();
        machine.begin("missing");
        let decision = machine.resolve(RowElementState::Unknown);
        assert!(decision.not_found && !decision.expand);
        assert_eq!(machine.phase(), &HighlightPhase::Idle);
    }

    #[test]
    fn dispose_drops_the_pending_scroll() {
        let mut machine = HighlightReconciler::default();
        machine.begin("a");
        machine.resolve(RowElementState::NotRendered {
            key: RowKey::new(Side::Primary, "a"),
        });
        machine.dispose();
        assert!(machine.on_transition_end().is_none());
        assert!(machine.advance(Duration::from_secs(5)).is_none());
    }
}
