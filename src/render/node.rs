use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// One element of the retained-mode UI tree.
///
/// Styles and attributes keep insertion order so serialized output is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiNode {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: SmallVec<[&'static str; 2]>,
    pub styles: IndexMap<&'static str, String>,
    pub attributes: IndexMap<&'static str, String>,
    pub text: Option<String>,
    pub children: Vec<UiNode>,
    /// Length properties that were given a non-finite number and left unset.
    pub non_finite_lengths: SmallVec<[&'static str; 1]>,
}

impl UiNode {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn div() -> Self {
        Self::new("div")
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    #[must_use]
    pub fn with_style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.insert(property, value.into());
        self
    }

    /// Sets a CSS pixel length.
    #[must_use]
    pub fn with_px(self, property: &'static str, value: f64) -> Self {
        self.with_length(property, value, "px")
    }

    /// Sets a CSS pixel length only when `value > 0`.
    #[must_use]
    pub fn with_positive_px(self, property: &'static str, value: f64) -> Self {
        if value > 0.0 {
            self.with_px(property, value)
        } else {
            self
        }
    }

    /// Sets a CSS percentage.
    #[must_use]
    pub fn with_pct(self, property: &'static str, value: f64) -> Self {
        self.with_length(property, value, "%")
    }

    fn with_length(mut self, property: &'static str, value: f64, unit: &str) -> Self {
        if value.is_finite() {
            self.styles.insert(property, format!("{value}{unit}"));
        } else {
            self.non_finite_lengths.push(property);
        }
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: UiNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = UiNode>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| *candidate == class)
    }

    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(UiNode::node_count).sum::<usize>()
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&UiNode> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Depth-first, document-order collection of nodes carrying `class`.
    #[must_use]
    pub fn find_all_by_class(&self, class: &str) -> Vec<&UiNode> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a UiNode>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, found);
        }
    }

    /// Concatenated text of this subtree in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.tag.is_empty() || !self.tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ChartError::InvalidFrame(format!(
                "invalid element tag `{}`",
                self.tag
            )));
        }
        if let Some(property) = self.non_finite_lengths.first() {
            return Err(ChartError::InvalidFrame(format!(
                "style `{property}` was given a non-finite length"
            )));
        }
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }
}
