use crate::core::Measurements;
use crate::error::ChartResult;
use crate::render::{UiNode, class_names};

/// Backend-agnostic tree for one chart render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub measurements: Measurements,
    pub root: UiNode,
}

impl ChartFrame {
    #[must_use]
    pub fn new(measurements: Measurements, root: UiNode) -> Self {
        Self { measurements, root }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.measurements.validate()?;
        self.root.validate()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<&UiNode> {
        self.root.find_all_by_class(class_names::ROW)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}
