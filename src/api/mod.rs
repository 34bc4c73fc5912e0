mod axis_scene;
mod bar_scene;
mod chart;
mod column_scene;
mod config;
mod line_scene;
mod mark_geometry;
mod retained_tree;
mod validation;
mod variant;

pub use chart::{Chart, ChartSetup, ChartState};
pub use config::{AxisPatch, BodyPatch, ChartConfig, ChartConfigPatch, GridlinePatch};
pub use retained_tree::ReconcileStats;
pub use variant::ChartVariant;
