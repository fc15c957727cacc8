use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisSide, Layout};
use crate::core::primitives::round_up_to_unit;
use crate::error::{ChartError, ChartResult};

/// Rounding granularity and tick step used for one range bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleStep {
    pub unit: f64,
    pub increment: f64,
}

impl ScaleStep {
    #[must_use]
    pub const fn new(unit: f64, increment: f64) -> Self {
        Self { unit, increment }
    }
}

/// Step applied while the combined top values stay below `below`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleBucket {
    pub below: f64,
    pub step: ScaleStep,
}

/// Tunable constants of the joint two-sided scale.
///
/// Defaults reproduce the shipped chart: a 0.5 side-balance clamp and range
/// thresholds 7/14/21/35/60 mapped to halves, ones, twos, threes, fives and
/// tens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleRules {
    #[serde(default = "default_balance_ratio")]
    pub balance_ratio: f64,
    #[serde(default = "default_buckets")]
    pub buckets: Vec<ScaleBucket>,
    #[serde(default = "default_fallback_step")]
    pub fallback: ScaleStep,
}

impl Default for ScaleRules {
    fn default() -> Self {
        Self {
            balance_ratio: default_balance_ratio(),
            buckets: default_buckets(),
            fallback: default_fallback_step(),
        }
    }
}

fn default_balance_ratio() -> f64 {
    0.5
}

fn default_buckets() -> Vec<ScaleBucket> {
    [
        (7.0, 0.5),
        (14.0, 1.0),
        (21.0, 2.0),
        (35.0, 3.0),
        (60.0, 5.0),
    ]
    .into_iter()
    .map(|(below, step)| ScaleBucket {
        below,
        step: ScaleStep::new(step, step),
    })
    .collect()
}

fn default_fallback_step() -> ScaleStep {
    ScaleStep::new(10.0, 10.0)
}

impl ScaleRules {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.balance_ratio.is_finite() || !(0.0..=1.0).contains(&self.balance_ratio) {
            return Err(ChartError::InvalidConfig(
                "scale balance ratio must be finite and in [0, 1]".to_owned(),
            ));
        }

        let mut previous = f64::NEG_INFINITY;
        for bucket in &self.buckets {
            if !bucket.below.is_finite() || bucket.below <= previous {
                return Err(ChartError::InvalidConfig(
                    "scale bucket thresholds must be finite and strictly ascending".to_owned(),
                ));
            }
            previous = bucket.below;
            validate_step(bucket.step)?;
        }
        validate_step(self.fallback)
    }

    /// Step for a combined range, first bucket whose threshold exceeds it.
    #[must_use]
    pub fn step_for_range(&self, total_range: f64) -> ScaleStep {
        self.buckets
            .iter()
            .find(|bucket| total_range < bucket.below)
            .map_or(self.fallback, |bucket| bucket.step)
    }
}

fn validate_step(step: ScaleStep) -> ChartResult<()> {
    for (name, value) in [("unit", step.unit), ("increment", step.increment)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "scale step {name} must be finite and > 0"
            )));
        }
    }
    Ok(())
}

/// Shared axis description for both sides.
///
/// `left_max`/`right_max` are the 100% references for bar widths. Both are
/// always `> 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub unit: f64,
    pub increment: f64,
    pub left_max: f64,
    pub right_max: f64,
    pub total_range: f64,
    pub left_range_pct: f64,
    pub right_range_pct: f64,
}

impl AxisScale {
    #[must_use]
    pub fn max_for(self, side: AxisSide) -> f64 {
        match side {
            AxisSide::Left => self.left_max,
            AxisSide::Right => self.right_max,
        }
    }

    #[must_use]
    pub fn range_pct_for(self, side: AxisSide) -> f64 {
        match side {
            AxisSide::Left => self.left_range_pct,
            AxisSide::Right => self.right_range_pct,
        }
    }

    /// Bar width as a percentage of its side's range.
    #[must_use]
    pub fn bar_width_pct(self, side: AxisSide, value: f64) -> f64 {
        value / self.max_for(side) * 100.0
    }
}

/// Top values after empty-side substitution and side balancing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveTops {
    pub left: f64,
    pub right: f64,
}

/// Substitutes missing sides and clamps the smaller side up to
/// `balance_ratio` of the larger one.
#[must_use]
pub fn effective_tops(
    left_top: Option<f64>,
    right_top: Option<f64>,
    balance_ratio: f64,
) -> EffectiveTops {
    let usable = |value: Option<f64>| value.filter(|v| v.is_finite() && *v > 0.0);
    let (mut left, mut right) = match (usable(left_top), usable(right_top)) {
        (Some(left), Some(right)) => (left, right),
        (Some(left), None) => (left, left),
        (None, Some(right)) => (right, right),
        (None, None) => (1.0, 1.0),
    };

    if left < right * balance_ratio {
        left = right * balance_ratio;
    } else if right < left * balance_ratio {
        right = left * balance_ratio;
    }

    EffectiveTops { left, right }
}

/// Jointly scales both sides onto one axis in the default layout, primary on
/// the right half.
///
/// `primary_top`/`secondary_top` are the largest values of each side's top
/// slice; `None` marks an empty side.
#[must_use]
pub fn compute_scale(
    primary_top: Option<f64>,
    secondary_top: Option<f64>,
    rules: &ScaleRules,
) -> AxisScale {
    let tops = effective_tops(secondary_top, primary_top, rules.balance_ratio);
    let raw_total_range = tops.left + tops.right;
    let step = rules.step_for_range(raw_total_range);

    let left_max = positive_max(round_up_to_unit(tops.left, step.unit), step.unit);
    let right_max = positive_max(round_up_to_unit(tops.right, step.unit), step.unit);
    let total_range = left_max + right_max;

    trace!(
        left_top = tops.left,
        right_top = tops.right,
        raw_total_range,
        unit = step.unit,
        increment = step.increment,
        "selected axis scale bucket"
    );

    AxisScale {
        unit: step.unit,
        increment: step.increment,
        left_max,
        right_max,
        total_range,
        left_range_pct: left_max / total_range * 100.0,
        right_range_pct: right_max / total_range * 100.0,
    }
}

/// [`compute_scale`] with each side's top placed on the half `layout` gives it.
#[must_use]
pub fn compute_layout_scale(
    primary_top: Option<f64>,
    secondary_top: Option<f64>,
    layout: Layout,
    rules: &ScaleRules,
) -> AxisScale {
    match layout {
        Layout::Left => compute_scale(primary_top, secondary_top, rules),
        Layout::Right => compute_scale(secondary_top, primary_top, rules),
    }
}

fn positive_max(rounded: f64, unit: f64) -> f64 {
    if rounded.is_finite() && rounded > 0.0 {
        rounded
    } else {
        unit
    }
}

#[cfg(test)]
mod tests {
    use super::{ScaleBucket, ScaleRules, ScaleStep, compute_scale, effective_tops};

    #[test]
    fn default_rules_are_valid() {
        ScaleRules::default().validate().expect("defaults validate");
    }

    #[test]
    fn bucket_thresholds_must_ascend() {
        let rules = ScaleRules {
            buckets: vec![
                ScaleBucket { below: 10.0, step: ScaleStep::new(1.0, 1.0) },
                ScaleBucket { below: 5.0, step: ScaleStep::new(1.0, 1.0) },
            ],
            ..ScaleRules::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn range_exactly_on_threshold_moves_to_next_bucket() {
        let rules = ScaleRules::default();
        assert_eq!(rules.step_for_range(6.99).unit, 0.5);
        assert_eq!(rules.step_for_range(7.0).unit, 1.0);
        assert_eq!(rules.step_for_range(60.0).unit, 10.0);
    }

    #[test]
    fn one_empty_side_mirrors_the_other() {
        let tops = effective_tops(None, Some(4.0), 0.5);
        assert_eq!((tops.left, tops.right), (4.0, 4.0));
    }

    #[test]
    fn zero_valued_sides_are_treated_as_empty() {
        let scale = compute_scale(Some(0.0), Some(0.0), &ScaleRules::default());
        assert_eq!(scale.left_max, 1.0);
        assert_eq!(scale.right_max, 1.0);
    }

    #[test]
    fn small_range_rounds_to_halves() {
        let scale = compute_scale(Some(2.2), Some(1.3), &ScaleRules::default());
        assert_eq!(scale.right_max, 2.5);
        assert_eq!(scale.left_max, 1.5);
        assert_eq!(scale.increment, 0.5);
    }
}
