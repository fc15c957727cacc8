use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub fn f64_to_decimal(value: f64, field_name: &str) -> ChartResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as decimal"))
    })
}

/// Smallest multiple of `unit` that is `>= value`. `unit` must be `> 0`.
///
/// Computed in decimal space so units such as `0.5` or `0.1` never produce
/// float artifacts like `0.30000000000000004`. The decimal conversion drops
/// the last bits of values such as `3.0000000000000004`, so a result that
/// lands below `value` is bumped one more unit. Magnitudes outside the decimal
/// range fall back to plain float arithmetic.
#[must_use]
pub fn round_up_to_unit(value: f64, unit: f64) -> f64 {
    let exact = f64_to_decimal(value, "value")
        .and_then(|decimal_value| Ok((decimal_value, f64_to_decimal(unit, "unit")?)))
        .and_then(|(decimal_value, decimal_unit)| {
            let steps = decimal_value
                .checked_div(decimal_unit)
                .ok_or_else(|| ChartError::InvalidData("rounding overflow".to_owned()))?
                .ceil();
            let rounded = multiple_of(steps, decimal_unit)?;
            if rounded >= value {
                return Ok(rounded);
            }
            multiple_of(steps + Decimal::ONE, decimal_unit)
        });

    match exact {
        Ok(rounded) if rounded >= value => rounded,
        _ => {
            let rounded = (value / unit).ceil() * unit;
            if rounded < value { rounded + unit } else { rounded }
        }
    }
}

fn multiple_of(steps: Decimal, unit: Decimal) -> ChartResult<f64> {
    let rounded = steps
        .checked_mul(unit)
        .ok_or_else(|| ChartError::InvalidData("rounding overflow".to_owned()))?;
    decimal_to_f64(rounded.normalize(), "rounded value")
}

/// `step * index` without accumulated float error.
#[must_use]
pub fn nth_step(step: f64, index: u32) -> f64 {
    f64_to_decimal(step, "step")
        .and_then(|step| {
            let value = step
                .checked_mul(Decimal::from(index))
                .ok_or_else(|| ChartError::InvalidData("step overflow".to_owned()))?;
            decimal_to_f64(value.normalize(), "step value")
        })
        .unwrap_or_else(|_| step * f64::from(index))
}

#[cfg(test)]
mod tests {
    use super::{nth_step, round_up_to_unit};

    #[test]
    fn round_up_never_rounds_down() {
        assert_eq!(round_up_to_unit(3.0, 0.5), 3.0);
        assert_eq!(round_up_to_unit(3.01, 0.5), 3.5);
        assert_eq!(round_up_to_unit(3.6, 0.5), 4.0);
        assert_eq!(round_up_to_unit(11.0, 2.0), 12.0);
        assert_eq!(round_up_to_unit(61.0, 10.0), 70.0);
    }

    #[test]
    fn round_up_holds_for_values_one_ulp_above_a_multiple() {
        let cases = [
            (3.0000000000000004, 0.5, 3.5),
            (1.0000000000000002, 0.5, 1.5),
            (7.000000000000001, 0.5, 7.5),
            (0.5000000000000001, 0.5, 1.0),
            (10.000000000000002, 2.0, 12.0),
        ];
        for (value, unit, expected) in cases {
            let rounded = round_up_to_unit(value, unit);
            assert!(rounded >= value, "{value} rounded down to {rounded}");
            assert_eq!(rounded, expected);
        }
    }

    #[test]
    fn round_up_falls_back_outside_decimal_range() {
        let rounded = round_up_to_unit(1e30, 10.0);
        assert!(rounded >= 1e30);
    }

    #[test]
    fn nth_step_is_exact_for_fractional_steps() {
        assert_eq!(nth_step(0.1, 3), 0.3);
        assert_eq!(nth_step(0.5, 7), 3.5);
    }
}
