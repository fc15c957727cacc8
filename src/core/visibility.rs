use serde::{Deserialize, Serialize};

/// Row count above which collapsed rows are dropped from the tree instead
/// of being animated to zero height.
pub const DEFAULT_LARGE_DATASET_ROW_LIMIT: usize = 900;

/// Whether row `index` of the combined sequence is shown.
///
/// The combined sequence is the primary side in descending order followed by
/// the secondary side in ascending order, so the secondary top-N sits at the
/// tail. Collapsing hides the middle.
#[must_use]
pub fn compute_row_visibility(
    index: usize,
    expanded: bool,
    top_count_left: usize,
    top_count_right: usize,
    total_count: usize,
) -> bool {
    expanded
        || index < top_count_right
        || index >= total_count.saturating_sub(top_count_left)
}

/// How a row appears in the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowPresence {
    Visible,
    /// Instantiated at zero height so the collapse animates.
    Collapsed,
    /// Not instantiated at all.
    Omitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowVisibilityPolicy {
    pub large_dataset_row_limit: usize,
}

impl Default for RowVisibilityPolicy {
    fn default() -> Self {
        Self {
            large_dataset_row_limit: DEFAULT_LARGE_DATASET_ROW_LIMIT,
        }
    }
}

impl RowVisibilityPolicy {
    #[must_use]
    pub fn is_large(self, total_count: usize) -> bool {
        total_count > self.large_dataset_row_limit
    }

    #[must_use]
    pub fn presence(self, visible: bool, total_count: usize) -> RowPresence {
        match (visible, self.is_large(total_count)) {
            (true, _) => RowPresence::Visible,
            (false, false) => RowPresence::Collapsed,
            (false, true) => RowPresence::Omitted,
        }
    }
}
