use serde::{Deserialize, Serialize};

use crate::core::{AxisBound, AxisConfig, AxisKind, Dataset, GapPolicy, GridlineStyle, Margins};
use crate::error::{ChartError, ChartResult};

use super::validation::validate_chart_config;

/// Fully resolved chart options.
///
/// Axis kinds are owned by the chart variant and set once at creation;
/// everything else can be changed through [`ChartConfigPatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub datasets: Vec<Dataset>,
    pub margins: Margins,
    pub axis_bottom: AxisConfig,
    pub axis_left: AxisConfig,
    pub axis_right: AxisConfig,
    pub gap_policy: GapPolicy,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            datasets: Vec::new(),
            margins: Margins::default(),
            axis_bottom: AxisConfig::new(AxisKind::Linear, GridlineStyle::visible()),
            axis_left: AxisConfig::new(AxisKind::Linear, GridlineStyle::visible()),
            axis_right: AxisConfig::new(AxisKind::Linear, GridlineStyle::hidden()),
            gap_policy: GapPolicy::default(),
        }
    }
}

impl ChartConfig {
    /// Applies `patch` field by field.
    ///
    /// The merged result is validated before it replaces `self`; on error the
    /// current configuration is left untouched.
    pub fn merge(&mut self, patch: ChartConfigPatch) -> ChartResult<()> {
        let mut merged = self.clone();
        merged.apply(patch);
        validate_chart_config(&merged)?;
        *self = merged;
        Ok(())
    }

    fn apply(&mut self, patch: ChartConfigPatch) {
        if let Some(datasets) = patch.datasets {
            self.datasets = datasets;
        }
        if let Some(body) = patch.body {
            body.apply_to(&mut self.margins);
        }
        if let Some(axis) = patch.axis_bottom {
            axis.apply_to(&mut self.axis_bottom);
        }
        if let Some(axis) = patch.axis_left {
            axis.apply_to(&mut self.axis_left);
        }
        if let Some(axis) = patch.axis_right {
            axis.apply_to(&mut self.axis_right);
        }
        if let Some(gap_policy) = patch.gap_policy {
            self.gap_policy = gap_policy;
        }
    }
}

/// Partial update over [`ChartConfig`].
///
/// Only the enumerated option paths are read; `None` keeps the previous value
/// and unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<Dataset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_bottom: Option<AxisPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_left: Option<AxisPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_right: Option<AxisPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_policy: Option<GapPolicy>,
}

impl ChartConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_datasets(mut self, datasets: Vec<Dataset>) -> Self {
        self.datasets = Some(datasets);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: BodyPatch) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_axis_bottom(mut self, axis: AxisPatch) -> Self {
        self.axis_bottom = Some(axis);
        self
    }

    #[must_use]
    pub fn with_axis_left(mut self, axis: AxisPatch) -> Self {
        self.axis_left = Some(axis);
        self
    }

    #[must_use]
    pub fn with_axis_right(mut self, axis: AxisPatch) -> Self {
        self.axis_right = Some(axis);
        self
    }

    #[must_use]
    pub fn with_gap_policy(mut self, gap_policy: GapPolicy) -> Self {
        self.gap_policy = Some(gap_policy);
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config patch: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config patch: {e}"))
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,
}

impl BodyPatch {
    #[must_use]
    pub fn margins(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            margin_top: Some(top),
            margin_right: Some(right),
            margin_bottom: Some(bottom),
            margin_left: Some(left),
        }
    }

    fn apply_to(self, margins: &mut Margins) {
        if let Some(top) = self.margin_top {
            margins.top = top;
        }
        if let Some(right) = self.margin_right {
            margins.right = right;
        }
        if let Some(bottom) = self.margin_bottom {
            margins.bottom = bottom;
        }
        if let Some(left) = self.margin_left {
            margins.left = left;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridlines: Option<GridlinePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<AxisBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<AxisBound>,
}

impl AxisPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_inner_padding(mut self, inner_padding: f64) -> Self {
        self.inner_padding = Some(inner_padding);
        self
    }

    #[must_use]
    pub fn with_gridlines(mut self, gridlines: GridlinePatch) -> Self {
        self.gridlines = Some(gridlines);
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: AxisBound) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: AxisBound) -> Self {
        self.max = Some(max);
        self
    }

    fn apply_to(self, axis: &mut AxisConfig) {
        if let Some(padding) = self.padding {
            axis.padding = padding;
        }
        if let Some(inner_padding) = self.inner_padding {
            axis.inner_padding = inner_padding;
        }
        if let Some(gridlines) = self.gridlines {
            gridlines.apply_to(&mut axis.gridlines);
        }
        if let Some(min) = self.min {
            axis.min = min;
        }
        if let Some(max) = self.max {
            axis.max = max;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridlinePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl GridlinePatch {
    #[must_use]
    pub fn hidden(hidden: bool) -> Self {
        Self {
            hidden: Some(hidden),
            ..Self::default()
        }
    }

    fn apply_to(self, gridlines: &mut GridlineStyle) {
        if let Some(hidden) = self.hidden {
            gridlines.hidden = hidden;
        }
        if let Some(color) = self.color {
            gridlines.color = color;
        }
        if let Some(width) = self.width {
            gridlines.width = width;
        }
    }
}
