use std::time::Duration;

use crate::core::{BarDatum, Measurements, RowVisibilityPolicy};
use crate::error::ChartResult;
use crate::interaction::{HighlightReconciler, HoverTracker, ResizeDebouncer};

use super::{
    ChartConfig, ChartRenderModel, HighlightErrorFn, RowHoverFn, TitleFormatterFn,
    ValueFormatterFn, ViewportMeasurer,
};

/// Stateful two-sided layout engine.
///
/// Owns the datasets, the expand/collapse flag, the last measurements and the
/// highlight/resize timers. Every derived value is recomputed from that state
/// through [`ChartLayoutEngine::render_model`], memoized until the next
/// mutation.
pub struct ChartLayoutEngine {
    pub(super) config: ChartConfig,
    pub(super) primary: Vec<BarDatum>,
    pub(super) secondary: Vec<BarDatum>,
    pub(super) expanded: bool,
    pub(super) measurements: Measurements,
    pub(super) highlighted: Option<String>,
    pub(super) highlight: HighlightReconciler,
    pub(super) resize: ResizeDebouncer,
    pub(super) hover: HoverTracker,
    pub(super) measurer: Option<Box<dyn ViewportMeasurer>>,
    pub(super) format_value: Option<ValueFormatterFn>,
    pub(super) title_formatter: Option<TitleFormatterFn>,
    pub(super) on_row_hover: Option<RowHoverFn>,
    pub(super) on_highlight_error: Option<HighlightErrorFn>,
    pub(super) cached_model: Option<ChartRenderModel>,
    pub(super) disposed: bool,
}

impl ChartLayoutEngine {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let highlight = HighlightReconciler::new(
            Duration::from_millis(config.scroll_settle_delay_ms),
            config.min_laid_out_row_height_px,
        );
        Ok(Self {
            expanded: config.initial_expanded,
            resize: ResizeDebouncer::new(config.resize_policy),
            config,
            primary: Vec::new(),
            secondary: Vec::new(),
            measurements: Measurements::default(),
            highlighted: None,
            highlight,
            hover: HoverTracker::default(),
            measurer: None,
            format_value: None,
            title_formatter: None,
            on_row_hover: None,
            on_highlight_error: None,
            cached_model: None,
            disposed: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn primary_data(&self) -> &[BarDatum] {
        &self.primary
    }

    #[must_use]
    pub fn secondary_data(&self) -> &[BarDatum] {
        &self.secondary
    }

    #[must_use]
    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn set_value_formatter(&mut self, formatter: ValueFormatterFn) {
        self.format_value = Some(formatter);
        self.invalidate();
    }

    pub fn clear_value_formatter(&mut self) {
        self.format_value = None;
        self.invalidate();
    }

    pub fn set_title_formatter(&mut self, formatter: TitleFormatterFn) {
        self.title_formatter = Some(formatter);
        self.invalidate();
    }

    pub fn clear_title_formatter(&mut self) {
        self.title_formatter = None;
        self.invalidate();
    }

    pub fn set_on_row_hover(&mut self, callback: RowHoverFn) {
        self.on_row_hover = Some(callback);
    }

    pub fn set_on_highlight_error(&mut self, callback: HighlightErrorFn) {
        self.on_highlight_error = Some(callback);
    }

    /// Memoized render model, rebuilt after any state change.
    pub fn render_model(&mut self) -> &ChartRenderModel {
        let model = match self.cached_model.take() {
            Some(model) => model,
            None => ChartRenderModel::build(self),
        };
        self.cached_model.insert(model)
    }

    pub(super) fn visibility_policy(&self) -> RowVisibilityPolicy {
        RowVisibilityPolicy {
            large_dataset_row_limit: self.config.large_dataset_row_limit,
        }
    }

    pub(super) fn invalidate(&mut self) {
        self.cached_model = None;
    }
}
