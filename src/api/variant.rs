use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{AxisKind, AxisPosition, Body};
use crate::render::Scene;

use super::ChartConfig;
use super::bar_scene::build_bar_scene;
use super::column_scene::build_column_scene;
use super::line_scene::build_line_scene;

/// Chart shape. Each variant picks its axis kinds and geometry formulas over
/// the shared core toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartVariant {
    Line,
    Column,
    StackedColumn,
    Bar,
    StackedBar,
}

impl ChartVariant {
    #[must_use]
    pub const fn is_stacked(self) -> bool {
        matches!(self, Self::StackedColumn | Self::StackedBar)
    }

    #[must_use]
    pub const fn category_axis(self) -> AxisPosition {
        match self {
            Self::Line | Self::Column | Self::StackedColumn => AxisPosition::Bottom,
            Self::Bar | Self::StackedBar => AxisPosition::Left,
        }
    }

    #[must_use]
    pub const fn value_axis(self) -> AxisPosition {
        match self {
            Self::Line | Self::Column | Self::StackedColumn => AxisPosition::Left,
            Self::Bar | Self::StackedBar => AxisPosition::Bottom,
        }
    }

    /// Writes this variant's axis kinds into `config`.
    ///
    /// Only the line variant honours a `category_axis` override (point by
    /// default); every other variant needs a band category axis.
    pub fn configure_axes(self, config: &mut ChartConfig, category_axis: Option<AxisKind>) {
        if let Some(kind) = category_axis {
            if self != Self::Line && kind != AxisKind::Band {
                warn!(
                    variant = ?self,
                    requested = ?kind,
                    "category axis override ignored; variant requires a band axis"
                );
            }
        }

        config.axis_right.kind = AxisKind::Linear;
        match self {
            Self::Line => {
                config.axis_bottom.kind = category_axis.unwrap_or(AxisKind::Point);
                config.axis_left.kind = AxisKind::Linear;
            }
            Self::Column | Self::StackedColumn => {
                config.axis_bottom.kind = AxisKind::Band;
                config.axis_left.kind = AxisKind::Linear;
            }
            Self::Bar | Self::StackedBar => {
                config.axis_bottom.kind = AxisKind::Linear;
                config.axis_left.kind = AxisKind::Band;
            }
        }
    }

    /// Computes axes and marks for one update cycle.
    #[must_use]
    pub fn build_scene(self, config: &ChartConfig, body: Body) -> Scene {
        match self {
            Self::Line => build_line_scene(config, body),
            Self::Column | Self::StackedColumn => {
                build_column_scene(config, body, self.is_stacked())
            }
            Self::Bar | Self::StackedBar => build_bar_scene(config, body, self.is_stacked()),
        }
    }
}
