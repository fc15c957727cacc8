use crate::core::{Layout, RowKey};
use crate::render::{
    ChartFrame, GUTTER_WIDTH, RowRenderContext, RowRenderer, UiNode, class_names,
};

use super::ChartRenderModel;

/// Materializes a render model into a backend-agnostic UI tree.
///
/// `hovered` only drives row emphasis styling.
#[must_use]
pub fn build_frame(model: &ChartRenderModel, hovered: Option<&RowKey>) -> ChartFrame {
    let ctx = RowRenderContext {
        left_range_pct: model.scale.left_range_pct,
        right_range_pct: model.scale.right_range_pct,
        layout: model.layout,
        chart_area_width: model.measurements.chart_area_width,
        label_column_width: model.measurements.label_column_width,
        label_font_px: model.label_font_px,
    };

    let mut root = UiNode::div()
        .with_class(class_names::ROOT)
        .with_style("display", "flex")
        .with_style("flex-direction", "column");

    if model.expand_button.visible {
        root = root.with_child(
            UiNode::new("button")
                .with_class(class_names::EXPAND_BUTTON)
                .with_attribute("type", "button")
                .with_attribute("aria-expanded", model.expand_button.expanded.to_string())
                .with_text(model.expand_button.label.clone()),
        );
    }

    if let Some(titles) = &model.titles {
        let (left_title, right_title) = match model.layout {
            Layout::Left => (&titles.secondary, &titles.primary),
            Layout::Right => (&titles.primary, &titles.secondary),
        };
        let chart = UiNode::div()
            .with_style("display", "flex")
            .with_child(
                UiNode::div()
                    .with_class(class_names::TITLE)
                    .with_class(class_names::TITLE_LEFT)
                    .with_pct("width", ctx.left_range_pct)
                    .with_text(left_title.clone()),
            )
            .with_child(
                UiNode::div()
                    .with_class(class_names::TITLE)
                    .with_class(class_names::TITLE_RIGHT)
                    .with_pct("width", ctx.right_range_pct)
                    .with_text(right_title.clone()),
            );
        root = root.with_child(
            UiNode::div()
                .with_class(class_names::TITLE_ROW)
                .with_style("display", "flex")
                .with_children(columns(&ctx, chart)),
        );
    }

    let rows = model.rows.iter().map(|row| {
        let is_hovered =
            hovered.is_some_and(|key| key.side == row.side && key.id == row.datum.id);
        RowRenderer::render(row, &ctx, is_hovered)
    });
    root = root.with_child(
        UiNode::div()
            .with_class(class_names::GRID)
            .with_style("overflow-y", "auto")
            .with_children(rows),
    );

    let ticks = model.ticks.iter().map(|tick| {
        UiNode::div()
            .with_class(class_names::AXIS_TICK)
            .with_style("position", "absolute")
            .with_pct("left", tick.position_pct)
            .with_attribute("data-value", tick.value.to_string())
            .with_child(UiNode::div().with_class(class_names::AXIS_LINE))
            .with_text(tick.label.clone())
    });
    let axis_area = UiNode::div()
        .with_style("position", "relative")
        .with_children(ticks);
    root = root.with_child(
        UiNode::div()
            .with_class(class_names::AXIS)
            .with_style("display", "flex")
            .with_children(columns(&ctx, axis_area)),
    );

    if let Some(label) = &model.axis_label {
        root = root.with_child(
            UiNode::div()
                .with_class(class_names::AXIS_LABEL)
                .with_text(label.clone()),
        );
    }

    ChartFrame::new(model.measurements, root)
}

/// Lines `chart` up with the row columns: label, gutter, bars.
fn columns(ctx: &RowRenderContext, chart: UiNode) -> [UiNode; 3] {
    let label = UiNode::div().with_positive_px("width", ctx.label_column_width);
    let gutter = UiNode::div().with_style("width", GUTTER_WIDTH);
    let chart = chart.with_positive_px("width", ctx.chart_area_width);
    match ctx.layout {
        Layout::Left => [label, gutter, chart],
        Layout::Right => [chart, gutter, label],
    }
}
