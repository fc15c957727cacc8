use std::sync::Arc;

use crate::interaction::RowHoverEvent;

/// Formats axis tick values.
pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Builds a side title from `(label, shown_count, total_count)`.
pub type TitleFormatterFn = Arc<dyn Fn(&str, usize, usize) -> String + Send + Sync + 'static>;

/// Receives hover and leave events for tooltip rendering.
pub type RowHoverFn = Arc<dyn Fn(&RowHoverEvent) + Send + Sync + 'static>;

/// Receives a `highlighted` id that exists in neither dataset.
pub type HighlightErrorFn = Arc<dyn Fn(&str) + Send + Sync + 'static>;
