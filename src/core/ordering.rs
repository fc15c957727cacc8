use std::collections::HashSet;

use crate::core::{BarDatum, Side};
use crate::error::{ChartError, ChartResult};

/// One side's data in display order.
///
/// `all` is sorted by descending value, ties keep input order. `top_len` is
/// the length of the always-shown prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedSide {
    pub all: Vec<BarDatum>,
    pub top_len: usize,
}

impl OrderedSide {
    #[must_use]
    pub fn top(&self) -> &[BarDatum] {
        &self.all[..self.top_len]
    }

    /// Largest value among the top slice, `None` for an empty side.
    #[must_use]
    pub fn top_value(&self) -> Option<f64> {
        self.all.first().map(|datum| datum.value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Orders a copy of `data` by descending value and marks the first `n`.
///
/// The sort is stable so duplicate values keep their caller order.
#[must_use]
pub fn order_and_slice(data: &[BarDatum], n_values_to_show: usize) -> OrderedSide {
    let mut all = data.to_vec();
    all.sort_by(|left, right| right.value.total_cmp(&left.value));
    let top_len = n_values_to_show.min(all.len());
    OrderedSide { all, top_len }
}

/// Rejects non-finite or negative values and ids repeated within one side.
pub fn validate_side(side: Side, data: &[BarDatum]) -> ChartResult<()> {
    let mut seen = HashSet::with_capacity(data.len());
    for datum in data {
        datum.validate()?;
        if !seen.insert(datum.id.as_str()) {
            return Err(ChartError::DuplicateDatumId {
                side,
                id: datum.id.clone(),
            });
        }
    }
    Ok(())
}
