use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_LARGE_DATASET_ROW_LIMIT, Layout, ScaleRules, TransitionTiming};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    DEFAULT_MIN_LAID_OUT_ROW_HEIGHT_PX, DEFAULT_SCROLL_SETTLE_DELAY_MS, ResizePolicy,
};

/// Static side titles.
///
/// `{count}` and `{total}` are replaced by the number of rows shown and the
/// side's row count unless a title formatter is installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleConfig {
    pub primary: String,
    pub secondary: String,
}

impl TitleConfig {
    #[must_use]
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandCollapseText {
    pub to_expand: String,
    pub to_collapse: String,
}

impl Default for ExpandCollapseText {
    fn default() -> Self {
        Self {
            to_expand: "Show all".to_owned(),
            to_collapse: "Show only top values".to_owned(),
        }
    }
}

/// Public chart configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Callbacks are installed on the
/// engine separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_n_values_to_show")]
    pub n_values_to_show: usize,
    #[serde(default)]
    pub titles: Option<TitleConfig>,
    #[serde(default)]
    pub expand_collapse_text: ExpandCollapseText,
    #[serde(default)]
    pub axis_label: Option<String>,
    #[serde(default)]
    pub hide_expand_collapse_button: bool,
    #[serde(default)]
    pub initial_expanded: bool,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub scale_rules: ScaleRules,
    #[serde(default = "default_large_dataset_row_limit")]
    pub large_dataset_row_limit: usize,
    #[serde(default)]
    pub resize_policy: ResizePolicy,
    #[serde(default = "default_scroll_settle_delay_ms")]
    pub scroll_settle_delay_ms: u64,
    #[serde(default)]
    pub transition_timing: TransitionTiming,
    #[serde(default = "default_min_laid_out_row_height_px")]
    pub min_laid_out_row_height_px: f64,
}

fn default_n_values_to_show() -> usize {
    10
}

fn default_large_dataset_row_limit() -> usize {
    DEFAULT_LARGE_DATASET_ROW_LIMIT
}

fn default_scroll_settle_delay_ms() -> u64 {
    DEFAULT_SCROLL_SETTLE_DELAY_MS
}

fn default_min_laid_out_row_height_px() -> f64 {
    DEFAULT_MIN_LAID_OUT_ROW_HEIGHT_PX
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(default_n_values_to_show())
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(n_values_to_show: usize) -> Self {
        Self {
            n_values_to_show,
            titles: None,
            expand_collapse_text: ExpandCollapseText::default(),
            axis_label: None,
            hide_expand_collapse_button: false,
            initial_expanded: false,
            layout: Layout::default(),
            scale_rules: ScaleRules::default(),
            large_dataset_row_limit: default_large_dataset_row_limit(),
            resize_policy: ResizePolicy::default(),
            scroll_settle_delay_ms: default_scroll_settle_delay_ms(),
            transition_timing: TransitionTiming::default(),
            min_laid_out_row_height_px: default_min_laid_out_row_height_px(),
        }
    }

    #[must_use]
    pub fn with_titles(mut self, titles: TitleConfig) -> Self {
        self.titles = Some(titles);
        self
    }

    #[must_use]
    pub fn with_expand_collapse_text(
        mut self,
        to_expand: impl Into<String>,
        to_collapse: impl Into<String>,
    ) -> Self {
        self.expand_collapse_text = ExpandCollapseText {
            to_expand: to_expand.into(),
            to_collapse: to_collapse.into(),
        };
        self
    }

    #[must_use]
    pub fn with_axis_label(mut self, label: impl Into<String>) -> Self {
        self.axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_hidden_expand_collapse_button(mut self, hidden: bool) -> Self {
        self.hide_expand_collapse_button = hidden;
        self
    }

    #[must_use]
    pub fn with_initial_expanded(mut self, expanded: bool) -> Self {
        self.initial_expanded = expanded;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_scale_rules(mut self, rules: ScaleRules) -> Self {
        self.scale_rules = rules;
        self
    }

    #[must_use]
    pub fn with_large_dataset_row_limit(mut self, limit: usize) -> Self {
        self.large_dataset_row_limit = limit;
        self
    }

    #[must_use]
    pub fn with_resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.resize_policy = policy;
        self
    }

    #[must_use]
    pub fn with_scroll_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_settle_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_transition_timing(mut self, timing: TransitionTiming) -> Self {
        self.transition_timing = timing;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.n_values_to_show == 0 {
            return Err(ChartError::InvalidConfig(
                "n_values_to_show must be >= 1".to_owned(),
            ));
        }
        if !self.min_laid_out_row_height_px.is_finite() || self.min_laid_out_row_height_px < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "min laid-out row height must be finite and >= 0".to_owned(),
            ));
        }
        self.scale_rules.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
