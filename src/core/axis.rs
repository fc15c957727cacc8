use serde::{Deserialize, Serialize};

use crate::core::primitives::nth_step;
use crate::core::{AxisScale, AxisSide};

/// Upper bound on ticks emitted per side. Larger spans widen the stride to a
/// whole multiple of the increment.
pub const MAX_TICKS_PER_SIDE: u32 = 512;

const TICK_EPSILON: f64 = 1e-9;

/// One labeled axis position.
///
/// `position_pct` is measured from the left edge of the chart area; the
/// shared zero sits at `scale.left_range_pct`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub side: AxisSide,
    pub value: f64,
    pub position_pct: f64,
    pub label: String,
}

/// Ticks ordered left to right: the left side from its max down to one
/// increment, the shared zero, then the right side up to its max.
///
/// Each side stops at the last multiple of the increment that does not
/// exceed its max. The zero tick belongs to the right side.
#[must_use]
pub fn build_axis_ticks(scale: &AxisScale, format_value: &dyn Fn(f64) -> String) -> Vec<AxisTick> {
    let left_values = side_values(scale.increment, scale.left_max);
    let right_values = side_values(scale.increment, scale.right_max);

    let mut ticks = Vec::with_capacity(left_values.len() + right_values.len());
    for value in left_values.iter().rev().filter(|value| **value > 0.0) {
        ticks.push(AxisTick {
            side: AxisSide::Left,
            value: *value,
            position_pct: scale.left_range_pct - value / scale.total_range * 100.0,
            label: format_value(*value),
        });
    }
    for value in right_values {
        ticks.push(AxisTick {
            side: AxisSide::Right,
            value,
            position_pct: scale.left_range_pct + value / scale.total_range * 100.0,
            label: format_value(value),
        });
    }
    ticks
}

fn side_values(increment: f64, max: f64) -> Vec<f64> {
    if !increment.is_finite() || increment <= 0.0 || !max.is_finite() || max < 0.0 {
        return vec![0.0];
    }

    let steps = (max / increment + TICK_EPSILON).floor();
    let stride = if steps > f64::from(MAX_TICKS_PER_SIDE) {
        (steps / f64::from(MAX_TICKS_PER_SIDE)).ceil()
    } else {
        1.0
    };
    let step = increment * stride;

    let mut values = Vec::new();
    let mut index = 0u32;
    loop {
        let value = nth_step(step, index);
        if value > max + TICK_EPSILON || index > MAX_TICKS_PER_SIDE {
            break;
        }
        values.push(value);
        index += 1;
    }
    values
}

/// Identity formatter used when the caller supplies none.
#[must_use]
pub fn plain_value_label(value: f64) -> String {
    value.to_string()
}
