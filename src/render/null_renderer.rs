use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates the frame so tests catch malformed trees before a real
/// backend sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_node_count: usize,
    pub last_row_count: usize,
    pub frames_rendered: u64,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_node_count = frame.node_count();
        self.last_row_count = frame.rows().len();
        self.frames_rendered += 1;
        Ok(())
    }
}
