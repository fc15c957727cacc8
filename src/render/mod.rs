pub mod class_names;
mod frame;
mod html_renderer;
mod node;
mod null_renderer;
mod row_renderer;

pub use frame::ChartFrame;
pub use html_renderer::{HtmlRenderer, node_to_html};
pub use node::UiNode;
pub use null_renderer::NullRenderer;
pub use row_renderer::{GUTTER_WIDTH, RowRenderContext, RowRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `ChartFrame` so drawing code stays
/// isolated from layout and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}
