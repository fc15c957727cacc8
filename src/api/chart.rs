use tracing::trace;

use crate::core::Measurements;
use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

use super::{ChartConfig, ChartLayoutEngine, ViewportMeasurer, build_frame};

/// Public entry point: a layout engine paired with a rendering backend.
///
/// Hosts drive state through [`ComparisonBarChart::engine_mut`] and call
/// [`ComparisonBarChart::render`] whenever they want a fresh frame.
pub struct ComparisonBarChart<R: Renderer> {
    renderer: R,
    engine: ChartLayoutEngine,
}

impl<R: Renderer> ComparisonBarChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Ok(Self {
            renderer,
            engine: ChartLayoutEngine::new(config)?,
        })
    }

    #[must_use]
    pub fn engine(&self) -> &ChartLayoutEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ChartLayoutEngine {
        &mut self.engine
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Attaches the viewport and takes the first measurement.
    pub fn mount(&mut self, measurer: Box<dyn ViewportMeasurer>) -> Measurements {
        self.engine.attach_viewport(measurer)
    }

    /// Tears the chart down; pending timers never fire afterwards.
    pub fn unmount(&mut self) {
        self.engine.dispose();
    }

    /// Current frame without handing it to the backend.
    pub fn frame(&mut self) -> ChartFrame {
        let hovered = self.engine.hovered_row().cloned();
        build_frame(self.engine.render_model(), hovered.as_ref())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.frame();
        trace!(
            rows = frame.rows().len(),
            nodes = frame.node_count(),
            "rendering chart frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
