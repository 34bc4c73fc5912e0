use serde::{Deserialize, Serialize};

/// Measured size of the host element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 25.0,
            right: 15.0,
            bottom: 25.0,
            left: 35.0,
        }
    }
}

/// Plot rectangle inside the container.
///
/// `width`/`height` are derived from the container size every cycle and are
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub margins: Margins,
    pub width: f64,
    pub height: f64,
}

impl Body {
    /// Horizontal pixel range `[0, width]`.
    #[must_use]
    pub fn horizontal_range(self) -> (f64, f64) {
        (0.0, self.width)
    }

    /// Vertical pixel range `[height, 0]`; larger values sit higher.
    #[must_use]
    pub fn vertical_range(self) -> (f64, f64) {
        (self.height, 0.0)
    }
}

/// Computes the body rectangle for the current container size.
///
/// Oversized margins clamp the body to zero instead of producing negative
/// dimensions; non-finite inputs degrade to zero as well.
#[must_use]
pub fn compute_body(container: ContainerSize, margins: Margins) -> Body {
    let width = container.width - margins.left - margins.right;
    let height = container.height - margins.top - margins.bottom;
    Body {
        margins,
        width: clamp_dimension(width),
        height: clamp_dimension(height),
    }
}

fn clamp_dimension(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
