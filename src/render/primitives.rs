use serde::{Deserialize, Serialize};

use crate::core::{AxisPosition, Tick};
use crate::error::{ChartError, ChartResult};

/// Vertex in body pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

/// Area vertex: shared x with a baseline `y0` and value `y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y0: f64,
    pub y1: f64,
}

/// Interpolation the adapter applies when turning vertices into a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    Linear,
    /// Centripetal-family Catmull-Rom spline parameterized by `alpha`.
    CatmullRom { alpha: f64 },
}

/// Catmull-Rom with `alpha = 0.7`, used for every series path.
pub const SERIES_CURVE: Curve = Curve::CatmullRom { alpha: 0.7 };

/// Translation and optional clip/extent of a grouping element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Clip rectangle `(width, height)` anchored at the group origin.
    pub clip: Option<(f64, f64)>,
    /// Band width (columns) or band height (bars) for category groups.
    pub extent: Option<f64>,
}

impl GroupDescriptor {
    #[must_use]
    pub const fn plain() -> Self {
        Self::translated(0.0, 0.0)
    }

    #[must_use]
    pub const fn translated(translate_x: f64, translate_y: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            clip: None,
            extent: None,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite_coordinates(&[self.translate_x, self.translate_y], "group translation")?;
        if let Some((width, height)) = self.clip {
            ensure_size(width, "clip width")?;
            ensure_size(height, "clip height")?;
        }
        if let Some(extent) = self.extent {
            ensure_size(extent, "group extent")?;
        }
        Ok(())
    }
}

/// Fully resolved axis: tick set, gridline geometry and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub position: AxisPosition,
    pub translate_x: f64,
    pub translate_y: f64,
    pub ticks: Vec<Tick>,
    /// Offset added to each tick position before drawing label and gridline.
    pub tick_adjust: f64,
    /// Gridline length across the body; 0 draws no gridlines.
    pub gridline_length: f64,
    pub gridline_color: String,
    pub gridline_width: f64,
    /// Label nudge `(dx, dy)` relative to the tick anchor.
    pub label_offset: (f64, f64),
}

impl AxisDescriptor {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite_coordinates(&[self.translate_x, self.translate_y], "axis translation")?;
        ensure_finite_coordinates(&[self.tick_adjust], "tick adjust")?;
        ensure_size(self.gridline_length, "gridline length")?;
        ensure_size(self.gridline_width, "gridline width")?;
        for tick in &self.ticks {
            ensure_finite_coordinates(&[tick.position], "tick position")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub fill: Option<String>,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathShape {
    /// Open polyline runs; a gap separates consecutive runs.
    Line { runs: Vec<Vec<Vertex>> },
    /// Filled runs between a baseline and the values.
    Area { runs: Vec<Vec<AreaVertex>> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDescriptor {
    pub shape: PathShape,
    pub curve: Curve,
    pub style: PathStyle,
}

impl PathDescriptor {
    pub fn validate(&self) -> ChartResult<()> {
        match &self.shape {
            PathShape::Line { runs } => {
                for vertex in runs.iter().flatten() {
                    ensure_finite_coordinates(&[vertex.x, vertex.y], "line vertex")?;
                }
            }
            PathShape::Area { runs } => {
                for vertex in runs.iter().flatten() {
                    ensure_finite_coordinates(&[vertex.x, vertex.y0, vertex.y1], "area vertex")?;
                }
            }
        }
        ensure_size(self.style.stroke_width, "path stroke width")?;
        if !(0.0..=1.0).contains(&self.style.opacity) {
            return Err(ChartError::InvalidData(
                "path opacity must be in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Rectangle mark relative to its parent group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectDescriptor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

impl RectDescriptor {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite_coordinates(&[self.x, self.y], "rect origin")?;
        ensure_size(self.width, "rect width")?;
        ensure_size(self.height, "rect height")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleDescriptor {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

impl CircleDescriptor {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite_coordinates(&[self.cx, self.cy], "circle center")?;
        ensure_size(self.r, "circle radius")
    }
}

fn ensure_finite_coordinates(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_size(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{what} must be finite and >= 0")))
    }
}
