//! Class names emitted on the rendered tree.
//!
//! Hosts target these for styling, so renaming one is a breaking change.

pub const ROOT: &str = "comparison-bar-chart";
pub const TITLE_ROW: &str = "comparison-bar-chart-titles";
pub const TITLE: &str = "comparison-bar-chart-title";
pub const TITLE_LEFT: &str = "comparison-bar-chart-title-left";
pub const TITLE_RIGHT: &str = "comparison-bar-chart-title-right";
pub const EXPAND_BUTTON: &str = "comparison-bar-chart-expand-button";
pub const GRID: &str = "comparison-bar-chart-grid";
pub const ROW: &str = "comparison-bar-chart-row";
pub const ROW_HIDDEN: &str = "comparison-bar-chart-row-hidden";
pub const ROW_HOVERED: &str = "comparison-bar-chart-row-hovered";
pub const ROW_HIGHLIGHTED: &str = "comparison-bar-chart-row-highlighted";
pub const CELL: &str = "comparison-bar-chart-cell";
pub const LABEL_CELL: &str = "comparison-bar-chart-label-cell";
pub const GUTTER_CELL: &str = "comparison-bar-chart-gutter-cell";
pub const BAR_CELL: &str = "comparison-bar-chart-bar-cell";
pub const ROW_LABEL: &str = "comparison-bar-chart-row-label";
pub const RANGE_LEFT: &str = "comparison-bar-chart-range-left";
pub const RANGE_RIGHT: &str = "comparison-bar-chart-range-right";
pub const BAR: &str = "comparison-bar-chart-bar";
pub const BAR_LEFT: &str = "comparison-bar-chart-bar-left";
pub const BAR_RIGHT: &str = "comparison-bar-chart-bar-right";
pub const AXIS: &str = "comparison-bar-chart-axis";
pub const AXIS_TICK: &str = "comparison-bar-chart-axis-tick";
pub const AXIS_LINE: &str = "comparison-bar-chart-axis-line";
pub const AXIS_LABEL: &str = "comparison-bar-chart-axis-label";
