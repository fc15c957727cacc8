//! comparison-bar-chart: headless layout engine for mirrored two-sided bar
//! charts.
//!
//! Two datasets share one center axis: the engine picks legible axis bounds
//! for both sides, orders and collapses rows, reconciles a highlighted row
//! into view and emits hover events. Output is a retained-mode UI tree that
//! any [`render::Renderer`] backend can draw.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartLayoutEngine, ChartRenderModel, ComparisonBarChart};
pub use error::{ChartError, ChartResult};
