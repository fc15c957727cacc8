pub mod axis;
pub mod geometry;
pub mod ordering;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod visibility;

pub use axis::{AxisTick, MAX_TICKS_PER_SIDE, build_axis_ticks, plain_value_label};
pub use geometry::{
    RowGeometryInput, RowModel, TransitionTiming, build_row_models, row_height_px,
};
pub use ordering::{OrderedSide, order_and_slice, validate_side};
pub use scale::{
    AxisScale, EffectiveTops, ScaleBucket, ScaleRules, ScaleStep, compute_layout_scale,
    compute_scale, effective_tops,
};
pub use types::{AxisSide, BarDatum, Layout, Measurements, PointerPosition, RowKey, Side};
pub use visibility::{
    DEFAULT_LARGE_DATASET_ROW_LIMIT, RowPresence, RowVisibilityPolicy, compute_row_visibility,
};
