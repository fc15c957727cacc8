mod callbacks;
mod chart;
mod data_controller;
mod engine_config;
mod expand_controller;
mod frame_builder;
mod highlight_controller;
mod hover_controller;
mod json_contract;
mod layout_engine;
mod lifecycle_controller;
mod measurement_controller;
mod render_model;

pub use callbacks::{HighlightErrorFn, RowHoverFn, TitleFormatterFn, ValueFormatterFn};
pub use chart::ComparisonBarChart;
pub use engine_config::{ChartConfig, ExpandCollapseText, TitleConfig};
pub use frame_builder::build_frame;
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
};
pub use layout_engine::ChartLayoutEngine;
pub use lifecycle_controller::EngineTick;
pub use measurement_controller::ViewportMeasurer;
pub use render_model::{ChartRenderModel, ExpandButtonModel, SideTitles, label_font_px};
