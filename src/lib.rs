//! chartkit: SVG-style chart engine core.
//!
//! The crate decides where every axis, series and mark goes and which
//! elements changed between updates. Painting is left to a host-provided
//! [`render::CanvasAdapter`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig, ChartConfigPatch, ChartSetup, ChartVariant};
pub use error::{ChartError, ChartResult};
