use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One labeled value on either side of the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub id: String,
    pub title: String,
    pub value: f64,
    pub color: String,
}

impl BarDatum {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        value: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value,
            color: color.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "datum `{}` value must be finite and >= 0",
                self.id
            )));
        }
        Ok(())
    }
}

/// Dataset a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Primary,
    Secondary,
}

impl Side {
    /// Half of the shared axis this side grows into under `layout`.
    ///
    /// `Layout::Left` grows primary bars rightwards from the center axis and
    /// secondary bars leftwards; `Layout::Right` mirrors both.
    #[must_use]
    pub const fn axis_side(self, layout: Layout) -> AxisSide {
        match (self, layout) {
            (Self::Primary, Layout::Left) | (Self::Secondary, Layout::Right) => AxisSide::Right,
            (Self::Primary, Layout::Right) | (Self::Secondary, Layout::Left) => AxisSide::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSide {
    Left,
    Right,
}

impl AxisSide {
    /// Dataset rendered on this half under `layout`.
    #[must_use]
    pub const fn data_side(self, layout: Layout) -> Side {
        match (self, layout) {
            (Self::Right, Layout::Left) | (Self::Left, Layout::Right) => Side::Primary,
            (Self::Left, Layout::Left) | (Self::Right, Layout::Right) => Side::Secondary,
        }
    }
}

/// Direction of the chart: where the label column sits and which dataset
/// renders on which half of the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Labels left of the bars, text aligned right. Primary on the right half.
    #[default]
    Left,
    /// Labels right of the bars, text aligned left. Primary on the left half.
    Right,
}

/// Live-measured container sizes in CSS pixels.
///
/// All-zero means "not yet measured" and is a valid transient state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurements {
    pub container_height: f64,
    pub chart_area_width: f64,
    pub label_column_width: f64,
}

impl Measurements {
    #[must_use]
    pub fn new(container_height: f64, chart_area_width: f64, label_column_width: f64) -> Self {
        Self {
            container_height,
            chart_area_width,
            label_column_width,
        }
    }

    #[must_use]
    pub fn is_measured(self) -> bool {
        self.container_height > 0.0 || self.chart_area_width > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        let fields = [
            self.container_height,
            self.chart_area_width,
            self.label_column_width,
        ];
        if fields.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(ChartError::InvalidMeasurements {
                container_height: self.container_height,
                chart_area_width: self.chart_area_width,
                label_column_width: self.label_column_width,
            });
        }
        Ok(())
    }
}

/// Pointer location in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Identity of a rendered row. Ids are only unique within one side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowKey {
    pub side: Side,
    pub id: String,
}

impl RowKey {
    #[must_use]
    pub fn new(side: Side, id: impl Into<String>) -> Self {
        Self {
            side,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisSide, BarDatum, Layout, Measurements, Side};

    #[test]
    fn sides_map_to_opposite_axis_halves() {
        assert_eq!(Side::Primary.axis_side(Layout::Left), AxisSide::Right);
        assert_eq!(Side::Secondary.axis_side(Layout::Left), AxisSide::Left);
        assert_eq!(AxisSide::Left.data_side(Layout::Left), Side::Secondary);
    }

    #[test]
    fn right_layout_mirrors_the_halves() {
        assert_eq!(Side::Primary.axis_side(Layout::Right), AxisSide::Left);
        assert_eq!(Side::Secondary.axis_side(Layout::Right), AxisSide::Right);
        for half in [AxisSide::Left, AxisSide::Right] {
            for layout in [Layout::Left, Layout::Right] {
                assert_eq!(half.data_side(layout).axis_side(layout), half);
            }
        }
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(BarDatum::new("a", "A", -1.0, "#000").validate().is_err());
        assert!(BarDatum::new("a", "A", f64::NAN, "#000").validate().is_err());
        assert!(BarDatum::new("a", "A", 0.0, "#000").validate().is_ok());
    }

    #[test]
    fn zero_measurements_are_valid_but_unmeasured() {
        let m = Measurements::default();
        assert!(m.validate().is_ok());
        assert!(!m.is_measured());
    }
}
