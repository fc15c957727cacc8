use std::time::Duration;

use tracing::debug;

use crate::interaction::ScrollRequest;

use super::ChartLayoutEngine;

/// Work produced by one [`ChartLayoutEngine::advance`] step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineTick {
    pub scroll: Option<ScrollRequest>,
    pub remeasured: bool,
}

impl ChartLayoutEngine {
    /// Advances the engine's one-shot timers by `elapsed`.
    ///
    /// Fires the debounced resize measurement and the deferred highlight
    /// scroll once their delays pass.
    pub fn advance(&mut self, elapsed: Duration) -> EngineTick {
        if self.disposed {
            return EngineTick::default();
        }
        let remeasured = self.resize.advance(elapsed);
        if remeasured {
            self.measure();
        }
        EngineTick {
            scroll: self.highlight.advance(elapsed),
            remeasured,
        }
    }

    /// The row height transition finished; a deferred scroll fires now.
    pub fn on_transition_end(&mut self) -> Option<ScrollRequest> {
        if self.disposed {
            return None;
        }
        self.highlight.on_transition_end()
    }

    /// Teardown. Pending timers are cancelled and nothing fires afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        debug!(
            pending_scroll = self.highlight.has_pending_scroll(),
            pending_resize = self.resize.is_pending(),
            "disposing chart layout engine"
        );
        self.highlight.dispose();
        self.resize.cancel();
        self.hover.clear();
        self.measurer = None;
        self.disposed = true;
    }
}
