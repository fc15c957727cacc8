use tracing::debug;

use super::ChartLayoutEngine;

impl ChartLayoutEngine {
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether either side has rows beyond the top slice.
    #[must_use]
    pub fn has_collapsible_rows(&self) -> bool {
        let n = self.config.n_values_to_show;
        self.primary.len() > n || self.secondary.len() > n
    }

    /// Flips the expand/collapse flag and returns the new state.
    pub fn toggle_expanded(&mut self) -> bool {
        self.set_expanded(!self.expanded);
        self.expanded
    }

    /// Sets the flag; layout changes with it, so an attached viewport is
    /// remeasured.
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.disposed || self.expanded == expanded {
            return;
        }
        debug!(expanded, "expanded state changed");
        self.expanded = expanded;
        self.invalidate();
        self.measure();
        self.forget_hidden_hover();
    }
}
