use serde::{Deserialize, Serialize};

use crate::core::{
    AxisScale, AxisTick, Layout, Measurements, OrderedSide, RowGeometryInput, RowKey, RowModel,
    build_axis_ticks, build_row_models, compute_layout_scale, order_and_slice, plain_value_label,
    row_height_px,
};

use super::ChartLayoutEngine;

const LABEL_FONT_MIN_PX: f64 = 8.0;
const LABEL_FONT_MAX_PX: f64 = 14.4;
const LABEL_FONT_HEIGHT_RATIO: f64 = 0.04;

/// Resolved title text per side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideTitles {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandButtonModel {
    pub visible: bool,
    pub expanded: bool,
    pub label: String,
}

/// Everything a renderer needs for one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRenderModel {
    pub scale: AxisScale,
    pub ticks: Vec<AxisTick>,
    /// Combined sequence, primary descending then secondary ascending.
    pub rows: Vec<RowModel>,
    pub titles: Option<SideTitles>,
    pub expand_button: ExpandButtonModel,
    pub axis_label: Option<String>,
    pub layout: Layout,
    pub measurements: Measurements,
    pub row_height_px: f64,
    pub label_font_px: f64,
    pub expanded: bool,
    pub highlighted: Option<String>,
    pub primary_count: usize,
    pub secondary_count: usize,
}

impl ChartRenderModel {
    pub(super) fn build(engine: &ChartLayoutEngine) -> Self {
        let config = &engine.config;
        let primary = order_and_slice(&engine.primary, config.n_values_to_show);
        let secondary = order_and_slice(&engine.secondary, config.n_values_to_show);

        let scale = compute_layout_scale(
            primary.top_value(),
            secondary.top_value(),
            config.layout,
            &config.scale_rules,
        );
        let ticks = match &engine.format_value {
            Some(format_value) => build_axis_ticks(&scale, format_value.as_ref()),
            None => build_axis_ticks(&scale, &plain_value_label),
        };

        let measurements = engine.measurements;
        let rows = build_row_models(
            &primary,
            &secondary,
            RowGeometryInput {
                scale: &scale,
                layout: config.layout,
                expanded: engine.expanded,
                highlighted: engine.highlighted.as_deref(),
                container_height: measurements.container_height,
                timing: config.transition_timing,
                policy: engine.visibility_policy(),
            },
        );

        let titles = config.titles.as_ref().map(|titles| SideTitles {
            primary: engine.side_title(&titles.primary, &primary),
            secondary: engine.side_title(&titles.secondary, &secondary),
        });

        let expand_button = ExpandButtonModel {
            visible: !config.hide_expand_collapse_button && engine.has_collapsible_rows(),
            expanded: engine.expanded,
            label: if engine.expanded {
                config.expand_collapse_text.to_collapse.clone()
            } else {
                config.expand_collapse_text.to_expand.clone()
            },
        };

        Self {
            scale,
            ticks,
            rows,
            titles,
            expand_button,
            axis_label: config.axis_label.clone(),
            layout: config.layout,
            measurements,
            row_height_px: row_height_px(
                measurements.container_height,
                primary.top_len + secondary.top_len,
            ),
            label_font_px: label_font_px(measurements.container_height),
            expanded: engine.expanded,
            highlighted: engine.highlighted.clone(),
            primary_count: primary.len(),
            secondary_count: secondary.len(),
        }
    }

    #[must_use]
    pub fn row(&self, key: &RowKey) -> Option<&RowModel> {
        self.rows
            .iter()
            .find(|row| row.side == key.side && row.datum.id == key.id)
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &RowModel> {
        self.rows.iter().filter(|row| row.visible)
    }
}

/// Row label font size for a container height, clamped to `[8, 14.4]` px.
#[must_use]
pub fn label_font_px(container_height: f64) -> f64 {
    (container_height * LABEL_FONT_HEIGHT_RATIO).clamp(LABEL_FONT_MIN_PX, LABEL_FONT_MAX_PX)
}

impl ChartLayoutEngine {
    fn side_title(&self, label: &str, side: &OrderedSide) -> String {
        let shown = if self.expanded { side.len() } else { side.top_len };
        match &self.title_formatter {
            Some(formatter) => formatter(label, shown, side.len()),
            None => label
                .replace("{count}", &shown.to_string())
                .replace("{total}", &side.len().to_string()),
        }
    }
}
