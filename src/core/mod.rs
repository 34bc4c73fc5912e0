pub mod axis;
pub mod domain;
pub mod layout;
pub mod normalize;
pub mod primitives;
pub mod reconcile;
pub mod scale;
pub mod stack;
pub mod types;

pub use axis::{AxisBound, AxisConfig, AxisKind, AxisPosition, GridlineStyle, ResolvedAxis, Tick};
pub use domain::{Domain, DomainSource, resolve_domain, resolve_stacked_domain};
pub use layout::{Body, ContainerSize, Margins, compute_body};
pub use normalize::{GapPolicy, defined_runs, normalize};
pub use reconcile::{Reconciliation, reconcile};
pub use scale::{BandScale, LinearScale, Scale, nice_ticks, tick_adjust};
pub use stack::{CategoryStack, StackedInterval, stack, stack_categories};
pub use types::{AxisSide, Category, Dataset, Point};
