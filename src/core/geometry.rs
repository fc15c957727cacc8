use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisScale, BarDatum, Layout, OrderedSide, RowKey, RowPresence, RowVisibilityPolicy, Side,
    compute_row_visibility,
};

/// Transition delays applied while no highlight is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTiming {
    /// Delay before a collapsing row shrinks, lets its bar retract first.
    pub collapsed_row_delay_ms: u32,
    /// Delay before a revealed bar grows, lets its row open first.
    pub bar_reveal_delay_ms: u32,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            collapsed_row_delay_ms: 150,
            bar_reveal_delay_ms: 300,
        }
    }
}

/// Fully resolved geometry for one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowModel {
    pub datum: BarDatum,
    pub side: Side,
    /// Position in the combined sequence.
    pub index: usize,
    pub visible: bool,
    pub height_px: f64,
    /// Width relative to the side's range, `0` while hidden.
    pub bar_width_pct: f64,
    pub highlighted: bool,
    pub height_delay_ms: Option<u32>,
    pub bar_delay_ms: Option<u32>,
}

impl RowModel {
    #[must_use]
    pub fn key(&self) -> RowKey {
        RowKey::new(self.side, self.datum.id.clone())
    }
}

/// Inputs shared by every row of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RowGeometryInput<'a> {
    pub scale: &'a AxisScale,
    pub layout: Layout,
    pub expanded: bool,
    pub highlighted: Option<&'a str>,
    pub container_height: f64,
    pub timing: TransitionTiming,
    pub policy: RowVisibilityPolicy,
}

/// Height of one visible row: the container split across both top slices.
#[must_use]
pub fn row_height_px(container_height: f64, top_count_total: usize) -> f64 {
    if container_height <= 0.0 || top_count_total == 0 {
        return 0.0;
    }
    container_height / top_count_total as f64
}

/// Builds row models for the combined sequence: primary descending, then
/// secondary ascending. Rows the visibility policy omits are skipped.
#[must_use]
pub fn build_row_models(
    primary: &OrderedSide,
    secondary: &OrderedSide,
    input: RowGeometryInput<'_>,
) -> Vec<RowModel> {
    let total_count = primary.len() + secondary.len();
    let height = row_height_px(input.container_height, primary.top_len + secondary.top_len);
    let highlight_active = input.highlighted.is_some();

    if input.policy.is_large(total_count) && !input.expanded {
        debug!(
            total_count,
            limit = input.policy.large_dataset_row_limit,
            "large dataset: omitting collapsed rows"
        );
    }

    let combined = primary
        .all
        .iter()
        .map(|datum| (Side::Primary, datum))
        .chain(secondary.all.iter().rev().map(|datum| (Side::Secondary, datum)));

    let mut rows = Vec::with_capacity(total_count);
    for (index, (side, datum)) in combined.enumerate() {
        let visible = compute_row_visibility(
            index,
            input.expanded,
            secondary.top_len,
            primary.top_len,
            total_count,
        );
        if input.policy.presence(visible, total_count) == RowPresence::Omitted {
            continue;
        }

        let (height_px, bar_width_pct, height_delay_ms, bar_delay_ms) = if visible {
            (
                height,
                input.scale.bar_width_pct(side.axis_side(input.layout), datum.value),
                None,
                (!highlight_active).then_some(input.timing.bar_reveal_delay_ms),
            )
        } else {
            (
                0.0,
                0.0,
                (!highlight_active).then_some(input.timing.collapsed_row_delay_ms),
                None,
            )
        };

        rows.push(RowModel {
            datum: datum.clone(),
            side,
            index,
            visible,
            height_px,
            bar_width_pct,
            highlighted: input.highlighted == Some(datum.id.as_str()),
            height_delay_ms,
            bar_delay_ms,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::{RowGeometryInput, TransitionTiming, build_row_models, row_height_px};
    use crate::core::{
        BarDatum, Layout, RowVisibilityPolicy, ScaleRules, Side, compute_layout_scale,
        compute_scale, order_and_slice,
    };

    fn side(prefix: &str, values: &[f64]) -> Vec<BarDatum> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| BarDatum::new(format!("{prefix}{i}"), format!("{prefix} {i}"), *v, "#333"))
            .collect()
    }

    #[test]
    fn unmeasured_container_yields_zero_height() {
        assert_eq!(row_height_px(0.0, 4), 0.0);
        assert_eq!(row_height_px(400.0, 0), 0.0);
        assert_eq!(row_height_px(400.0, 4), 100.0);
    }

    #[test]
    fn secondary_rows_follow_in_ascending_order() {
        let primary = order_and_slice(&side("p", &[1.0, 3.0]), 10);
        let secondary = order_and_slice(&side("s", &[5.0, 2.0]), 10);
        let scale = compute_scale(primary.top_value(), secondary.top_value(), &ScaleRules::default());
        let rows = build_row_models(
            &primary,
            &secondary,
            RowGeometryInput {
                scale: &scale,
                layout: Layout::Left,
                expanded: false,
                highlighted: None,
                container_height: 400.0,
                timing: TransitionTiming::default(),
                policy: RowVisibilityPolicy::default(),
            },
        );
        let order: Vec<(Side, f64)> = rows.iter().map(|r| (r.side, r.datum.value)).collect();
        assert_eq!(
            order,
            vec![
                (Side::Primary, 3.0),
                (Side::Primary, 1.0),
                (Side::Secondary, 2.0),
                (Side::Secondary, 5.0),
            ]
        );
        assert!(rows.iter().all(|r| r.visible && r.height_px == 100.0));
        assert_eq!(rows[3].bar_width_pct, 100.0);
    }

    #[test]
    fn right_layout_measures_primary_bars_against_the_left_half() {
        let primary = order_and_slice(&side("p", &[8.0]), 10);
        let secondary = order_and_slice(&side("s", &[2.0]), 10);
        let scale = compute_layout_scale(
            primary.top_value(),
            secondary.top_value(),
            Layout::Right,
            &ScaleRules::default(),
        );
        assert!(scale.left_max >= 8.0 && scale.left_max > scale.right_max);

        let rows = build_row_models(
            &primary,
            &secondary,
            RowGeometryInput {
                scale: &scale,
                layout: Layout::Right,
                expanded: false,
                highlighted: None,
                container_height: 100.0,
                timing: TransitionTiming::default(),
                policy: RowVisibilityPolicy::default(),
            },
        );
        assert_eq!(rows[0].bar_width_pct, 8.0 / scale.left_max * 100.0);
        assert_eq!(rows[1].bar_width_pct, 2.0 / scale.right_max * 100.0);
    }

    #[test]
    fn active_highlight_suppresses_transition_delays() {
        let primary = order_and_slice(&side("p", &[1.0, 3.0, 2.0]), 1);
        let secondary = order_and_slice(&[], 1);
        let scale = compute_scale(primary.top_value(), None, &ScaleRules::default());
        let rows = build_row_models(
            &primary,
            &secondary,
            RowGeometryInput {
                scale: &scale,
                layout: Layout::Left,
                expanded: false,
                highlighted: Some("p0"),
                container_height: 100.0,
                timing: TransitionTiming::default(),
                policy: RowVisibilityPolicy::default(),
            },
        );
        assert!(rows.iter().all(|r| r.height_delay_ms.is_none() && r.bar_delay_ms.is_none()));
        assert!(rows.iter().any(|r| r.highlighted && !r.visible));
    }
}
