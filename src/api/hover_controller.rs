use tracing::trace;

use crate::core::{PointerPosition, RowKey};
use crate::interaction::{PointerEventKind, RowHoverEvent};
use crate::render::RowRenderer;

use super::ChartLayoutEngine;

impl ChartLayoutEngine {
    /// Routes a pointer event on a row.
    ///
    /// Events on collapsed or absent rows are dropped. Otherwise the local
    /// hover flag is updated and the hover callback receives the event
    /// before it is returned.
    pub fn pointer_event(
        &mut self,
        key: &RowKey,
        kind: PointerEventKind,
        position: PointerPosition,
    ) -> Option<RowHoverEvent> {
        if self.disposed {
            return None;
        }
        let row = self.render_model().row(key)?;
        let event = RowRenderer::pointer_event(row, kind, position)?;

        self.hover.on_pointer(key, kind);
        if let Some(callback) = &self.on_row_hover {
            callback(&event);
        }
        Some(event)
    }

    #[must_use]
    pub fn hovered_row(&self) -> Option<&RowKey> {
        self.hover.hovered()
    }

    /// Drops the hover flag once its row is gone or collapsed. Such a row
    /// never receives the pointer leave.
    pub(super) fn forget_hidden_hover(&mut self) {
        let Some(key) = self.hover.hovered().cloned() else {
            return;
        };
        let interactive = self
            .render_model()
            .row(&key)
            .is_some_and(RowRenderer::is_interactive);
        if !interactive {
            trace!(id = %key.id, "dropping hover on hidden row");
            self.hover.clear();
        }
    }
}
