use tracing::warn;

use crate::core::{RowKey, Side};
use crate::interaction::{HighlightPhase, RowElementState, ScrollRequest};

use super::ChartLayoutEngine;

impl ChartLayoutEngine {
    /// Changes the highlighted id and reconciles it against the layout.
    ///
    /// Returns a scroll request when the row is already laid out. A collapsed
    /// row forces the chart open and defers its scroll until
    /// [`ChartLayoutEngine::on_transition_end`] or the settle delay. An id
    /// present in neither dataset is reported to the highlight error callback
    /// once per change and leaves the expand state alone.
    pub fn set_highlighted(&mut self, id: Option<&str>) -> Option<ScrollRequest> {
        if self.disposed || self.highlighted.as_deref() == id {
            return None;
        }
        self.highlighted = id.map(str::to_owned);
        self.invalidate();

        let Some(id) = id else {
            self.highlight.clear();
            return None;
        };

        self.highlight.begin(id);
        let element = self.locate_row_element(id);
        let decision = self.highlight.resolve(element);
        if decision.not_found {
            warn!(id, "highlighted id not found in either dataset");
            if let Some(callback) = &self.on_highlight_error {
                callback(id);
            }
            return None;
        }
        if decision.expand {
            self.set_expanded(true);
        }
        decision.scroll_target
    }

    #[must_use]
    pub fn highlight_phase(&self) -> &HighlightPhase {
        self.highlight.phase()
    }

    #[must_use]
    pub fn has_pending_scroll(&self) -> bool {
        self.highlight.has_pending_scroll()
    }

    /// Primary rows come first in document order, so they win when the id
    /// exists on both sides.
    fn highlight_target(&self, id: &str) -> Option<RowKey> {
        if self.primary.iter().any(|datum| datum.id == id) {
            Some(RowKey::new(Side::Primary, id))
        } else if self.secondary.iter().any(|datum| datum.id == id) {
            Some(RowKey::new(Side::Secondary, id))
        } else {
            None
        }
    }

    fn locate_row_element(&mut self, id: &str) -> RowElementState {
        let Some(key) = self.highlight_target(id) else {
            return RowElementState::Unknown;
        };

        if let Some(measurer) = &self.measurer {
            return match measurer.rendered_row_height(&key) {
                Some(height_px) => RowElementState::Rendered { key, height_px },
                None => RowElementState::NotRendered { key },
            };
        }

        // Without a viewport the model stands in for the layout.
        let min_height = self.config.min_laid_out_row_height_px;
        let model = self.render_model();
        let height_px = match model.row(&key) {
            Some(row) if row.visible => row.height_px.max(min_height),
            Some(_) => 0.0,
            None => return RowElementState::NotRendered { key },
        };
        RowElementState::Rendered { key, height_px }
    }
}
