use tracing::debug;

use crate::core::{BarDatum, Layout, Side, validate_side};
use crate::error::{ChartError, ChartResult};

use super::ChartLayoutEngine;

impl ChartLayoutEngine {
    /// Replaces both datasets.
    ///
    /// Either side may be empty. Caller order is kept as given; display order
    /// is derived on every render.
    pub fn set_data(&mut self, primary: Vec<BarDatum>, secondary: Vec<BarDatum>) -> ChartResult<()> {
        validate_side(Side::Primary, &primary)?;
        validate_side(Side::Secondary, &secondary)?;
        debug!(
            primary_count = primary.len(),
            secondary_count = secondary.len(),
            "set comparison data"
        );
        self.primary = primary;
        self.secondary = secondary;
        self.invalidate();
        self.forget_hidden_hover();
        Ok(())
    }

    pub fn set_primary_data(&mut self, data: Vec<BarDatum>) -> ChartResult<()> {
        validate_side(Side::Primary, &data)?;
        debug!(count = data.len(), "set primary data");
        self.primary = data;
        self.invalidate();
        self.forget_hidden_hover();
        Ok(())
    }

    pub fn set_secondary_data(&mut self, data: Vec<BarDatum>) -> ChartResult<()> {
        validate_side(Side::Secondary, &data)?;
        debug!(count = data.len(), "set secondary data");
        self.secondary = data;
        self.invalidate();
        self.forget_hidden_hover();
        Ok(())
    }

    pub fn set_n_values_to_show(&mut self, n_values_to_show: usize) -> ChartResult<()> {
        if n_values_to_show == 0 {
            return Err(ChartError::InvalidConfig(
                "n_values_to_show must be >= 1".to_owned(),
            ));
        }
        self.config.n_values_to_show = n_values_to_show;
        self.invalidate();
        self.forget_hidden_hover();
        Ok(())
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.config.layout != layout {
            self.config.layout = layout;
            self.invalidate();
        }
    }
}
