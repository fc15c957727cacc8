use tracing::{trace, warn};

use crate::core::{Measurements, RowKey};
use crate::error::ChartResult;

use super::ChartLayoutEngine;

/// Host seam onto the rendered element tree.
///
/// Implemented by whatever owns the real layout (a DOM binding, a test
/// fixture). Returning `None` means the measured elements are not attached.
pub trait ViewportMeasurer {
    /// Sizes of the scrollable grid and the bar/label columns.
    fn measure(&self) -> Option<Measurements>;

    /// Rendered height of the element for `key`, `None` when no element
    /// exists for that row.
    fn rendered_row_height(&self, key: &RowKey) -> Option<f64>;
}

impl ChartLayoutEngine {
    /// Mounts the engine onto a viewport and measures it right away.
    pub fn attach_viewport(&mut self, measurer: Box<dyn ViewportMeasurer>) -> Measurements {
        self.measurer = Some(measurer);
        self.measure()
    }

    /// Unmounts the viewport; measurements stay at their last value.
    pub fn detach_viewport(&mut self) -> Option<Box<dyn ViewportMeasurer>> {
        self.resize.cancel();
        self.measurer.take()
    }

    #[must_use]
    pub fn is_viewport_attached(&self) -> bool {
        self.measurer.is_some()
    }

    /// Reads sizes from the attached viewport.
    ///
    /// Skipped, keeping the previous measurements, while nothing is attached
    /// or the host reports unusable sizes.
    pub fn measure(&mut self) -> Measurements {
        if self.disposed {
            return self.measurements;
        }
        let Some(measured) = self.measurer.as_ref().and_then(|measurer| measurer.measure())
        else {
            trace!("viewport not attached, measurement skipped");
            return self.measurements;
        };
        if let Err(err) = measured.validate() {
            warn!(error = %err, "ignoring invalid viewport measurement");
            return self.measurements;
        }
        if measured != self.measurements {
            trace!(
                container_height = measured.container_height,
                chart_area_width = measured.chart_area_width,
                label_column_width = measured.label_column_width,
                "viewport measured"
            );
            self.measurements = measured;
            self.invalidate();
        }
        self.measurements
    }

    /// Pushes measurements directly, for hosts that lay out on their own.
    pub fn set_measurements(&mut self, measurements: Measurements) -> ChartResult<()> {
        measurements.validate()?;
        if measurements != self.measurements {
            self.measurements = measurements;
            self.invalidate();
        }
        Ok(())
    }

    /// Viewport resized. Returns `true` when remeasurement ran immediately;
    /// under a debounce policy it runs from [`ChartLayoutEngine::advance`].
    pub fn notify_resize(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        if self.resize.on_resize() {
            self.measure();
            return true;
        }
        false
    }

    #[must_use]
    pub fn has_pending_resize(&self) -> bool {
        self.resize.is_pending()
    }
}
