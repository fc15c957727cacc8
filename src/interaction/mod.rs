mod highlight;
mod timer;

use serde::{Deserialize, Serialize};

use crate::core::{BarDatum, PointerPosition, RowKey};

pub use highlight::{
    DEFAULT_MIN_LAID_OUT_ROW_HEIGHT_PX, DEFAULT_SCROLL_SETTLE_DELAY_MS, HIGHLIGHTED_ELEMENT_ID,
    HighlightDecision, HighlightPhase, HighlightReconciler, RowElementState, ScrollBehavior,
    ScrollRequest, reconcile_highlight,
};
pub use timer::{OneShotTimer, ResizeDebouncer, ResizePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    Enter,
    Move,
    Leave,
}

/// Hover payload handed to an external tooltip.
///
/// `datum` is `None` when the pointer left the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowHoverEvent {
    pub datum: Option<BarDatum>,
    pub mouse_coords: PointerPosition,
}

/// Transient locally-hovered row, used only for row emphasis styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<RowKey>,
}

impl HoverTracker {
    #[must_use]
    pub fn hovered(&self) -> Option<&RowKey> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn is_hovered(&self, key: &RowKey) -> bool {
        self.hovered.as_ref() == Some(key)
    }

    pub fn on_pointer(&mut self, key: &RowKey, kind: PointerEventKind) {
        match kind {
            PointerEventKind::Enter | PointerEventKind::Move => {
                if !self.is_hovered(key) {
                    self.hovered = Some(key.clone());
                }
            }
            PointerEventKind::Leave => {
                if self.is_hovered(key) {
                    self.hovered = None;
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }
}
