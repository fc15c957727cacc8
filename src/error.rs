use thiserror::Error;

use crate::core::Side;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid measurements: container_height={container_height}, chart_area_width={chart_area_width}, label_column_width={label_column_width}")]
    InvalidMeasurements {
        container_height: f64,
        chart_area_width: f64,
        label_column_width: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("duplicate datum id `{id}` on {side:?} side")]
    DuplicateDatumId { side: Side, id: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),
}
