use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::primitives::format_number;

/// Discrete x value of an observation.
///
/// Numbers and strings are both accepted; equality is exact, so `"1"` and
/// `1` are distinct categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl Category {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.into_inner()),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(value.into_inner())),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Category {
    fn from(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

/// One observation. `y == None` means "no observation for this category",
/// which is distinct from `y == Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Category,
    #[serde(default)]
    pub y: Option<f64>,
}

impl Point {
    #[must_use]
    pub fn new(x: impl Into<Category>, y: f64) -> Self {
        Self {
            x: x.into(),
            y: Some(y),
        }
    }

    #[must_use]
    pub fn missing(x: impl Into<Category>) -> Self {
        Self {
            x: x.into(),
            y: None,
        }
    }
}

/// Value axis a dataset is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

/// A named series of observations supplied by the caller.
///
/// `name` is the stable identity used for reconciliation and must be unique
/// within one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub name: String,
    #[serde(default)]
    pub values: Vec<Point>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub axis: AxisSide,
    #[serde(default)]
    pub order: f64,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f64,
}

impl Dataset {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            values,
            color: default_color(),
            axis: AxisSide::default(),
            order: 0.0,
            line_width: default_line_width(),
            opacity: default_opacity(),
            circle_radius: default_circle_radius(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn on_axis(mut self, axis: AxisSide) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_circle_radius(mut self, circle_radius: f64) -> Self {
        self.circle_radius = circle_radius;
        self
    }

    /// First observation recorded for `category`, defined or not.
    #[must_use]
    pub fn observation(&self, category: &Category) -> Option<&Point> {
        self.values.iter().find(|point| &point.x == category)
    }

    /// Defined value at `category`, if any.
    #[must_use]
    pub fn value_at(&self, category: &Category) -> Option<f64> {
        self.observation(category).and_then(|point| point.y)
    }

    /// Defined y values in input order.
    pub fn defined_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|point| point.y)
    }
}

fn default_color() -> String {
    "#000".to_owned()
}

fn default_line_width() -> f64 {
    2.0
}

fn default_opacity() -> f64 {
    0.3
}

fn default_circle_radius() -> f64 {
    5.0
}
