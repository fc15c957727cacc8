use crate::core::{AxisSide, Layout, PointerPosition, RowModel, Side};
use crate::interaction::{HIGHLIGHTED_ELEMENT_ID, PointerEventKind, RowHoverEvent};
use crate::render::{UiNode, class_names};

const HIGHLIGHT_BACKGROUND: &str = "#f1f1f1";
/// Fixed spacer between the label and bar columns.
pub const GUTTER_WIDTH: &str = "2rem";

/// Values shared by every row of a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowRenderContext {
    pub left_range_pct: f64,
    pub right_range_pct: f64,
    pub layout: Layout,
    pub chart_area_width: f64,
    pub label_column_width: f64,
    pub label_font_px: f64,
}

/// Renders one row's mirrored bar pair and label.
///
/// Stateless: geometry comes precomputed in [`RowModel`] and the hover flag
/// is owned by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowRenderer;

impl RowRenderer {
    #[must_use]
    pub fn is_interactive(row: &RowModel) -> bool {
        row.visible
    }

    /// Translates a pointer event on `row` into a hover event.
    ///
    /// Collapsed rows are non-interactive and emit nothing.
    #[must_use]
    pub fn pointer_event(
        row: &RowModel,
        kind: PointerEventKind,
        position: PointerPosition,
    ) -> Option<RowHoverEvent> {
        if !Self::is_interactive(row) {
            return None;
        }
        let datum = match kind {
            PointerEventKind::Enter | PointerEventKind::Move => Some(row.datum.clone()),
            PointerEventKind::Leave => None,
        };
        Some(RowHoverEvent {
            datum,
            mouse_coords: position,
        })
    }

    #[must_use]
    pub fn render(row: &RowModel, ctx: &RowRenderContext, hovered: bool) -> UiNode {
        let mut root = UiNode::div()
            .with_class(class_names::ROW)
            .with_style("display", "flex")
            .with_attribute("data-side", side_attr(row))
            .with_attribute("data-id", row.datum.id.clone());
        if !row.visible {
            root = root.with_class(class_names::ROW_HIDDEN);
        }
        if hovered && row.visible {
            root = root.with_class(class_names::ROW_HOVERED);
        }
        if row.highlighted {
            root = root.with_class(class_names::ROW_HIGHLIGHTED);
        }

        let label_cell = cell(row)
            .with_class(class_names::LABEL_CELL)
            .with_positive_px("width", ctx.label_column_width)
            .with_children(label(row, ctx));
        let gutter_cell = cell(row)
            .with_class(class_names::GUTTER_CELL)
            .with_style("width", GUTTER_WIDTH);
        let bar_cell = bar_cell(row, ctx);

        match ctx.layout {
            Layout::Left => root.with_children([label_cell, gutter_cell, bar_cell]),
            Layout::Right => root.with_children([bar_cell, gutter_cell, label_cell]),
        }
    }
}

fn side_attr(row: &RowModel) -> &'static str {
    match row.side {
        Side::Primary => "primary",
        Side::Secondary => "secondary",
    }
}

fn cell(row: &RowModel) -> UiNode {
    let mut node = UiNode::div()
        .with_class(class_names::CELL)
        .with_px("height", row.height_px);
    if row.visible {
        if row.highlighted {
            node = node.with_style("background-color", HIGHLIGHT_BACKGROUND);
        }
    } else {
        node = node.with_style("pointer-events", "none");
    }
    if let Some(delay) = row.height_delay_ms {
        node = node.with_style("transition-delay", format!("{delay}ms"));
    }
    node
}

fn label(row: &RowModel, ctx: &RowRenderContext) -> Option<UiNode> {
    if !row.visible {
        return None;
    }
    let align = match ctx.layout {
        Layout::Left => "right",
        Layout::Right => "left",
    };
    Some(
        UiNode::div()
            .with_class(class_names::ROW_LABEL)
            .with_style("text-align", align)
            .with_px("font-size", ctx.label_font_px)
            .with_text(row.datum.title.clone()),
    )
}

fn bar_cell(row: &RowModel, ctx: &RowRenderContext) -> UiNode {
    let mut node = cell(row)
        .with_class(class_names::BAR_CELL)
        .with_positive_px("width", ctx.chart_area_width);
    if row.highlighted {
        node = node.with_id(HIGHLIGHTED_ELEMENT_ID);
    }

    let side = row.side.axis_side(ctx.layout);
    let left = UiNode::div()
        .with_class(class_names::RANGE_LEFT)
        .with_pct("width", ctx.left_range_pct)
        .with_children((side == AxisSide::Left).then(|| bar(row, class_names::BAR_LEFT)));
    let right = UiNode::div()
        .with_class(class_names::RANGE_RIGHT)
        .with_pct("width", ctx.right_range_pct)
        .with_children((side == AxisSide::Right).then(|| bar(row, class_names::BAR_RIGHT)));
    node.with_children([left, right])
}

fn bar(row: &RowModel, side_class: &'static str) -> UiNode {
    let mut node = UiNode::div()
        .with_class(class_names::BAR)
        .with_class(side_class)
        .with_style("background-color", row.datum.color.clone())
        .with_pct("width", row.bar_width_pct);
    if let Some(delay) = row.bar_delay_ms {
        node = node.with_style("transition-delay", format!("{delay}ms"));
    }
    node
}
