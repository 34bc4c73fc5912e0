mod element;
mod primitives;
mod recording_canvas;
mod scene;

pub use element::{ElementId, ElementKey, ElementRole};
pub use primitives::{
    AreaVertex, AxisDescriptor, CircleDescriptor, Curve, GroupDescriptor, PathDescriptor,
    PathShape, PathStyle, RectDescriptor, SERIES_CURVE, Vertex,
};
pub use recording_canvas::{RecordedElement, RecordedNode, RecordingCanvas};
pub use scene::{Element, Scene, VisualElement};

use serde::{Deserialize, Serialize};

use crate::core::ContainerSize;
use crate::error::ChartResult;

/// Opaque identifier of an element created by a [`CanvasAdapter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(u64);

impl ElementHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Where an upsert lands: the parent, the element's key and the handle it
/// already has when the element persists from the previous cycle.
#[derive(Debug, Clone, Copy)]
pub struct ElementSlot<'a> {
    pub parent: ElementHandle,
    pub key: &'a ElementKey,
    pub existing: Option<ElementHandle>,
}

/// Drawing surface the chart engine drives.
///
/// The engine only passes fully resolved geometry and style; adapters own
/// measurement, painting and path-string generation. Upserts with
/// `slot.existing == None` create a new element under `slot.parent`;
/// otherwise they refresh the existing element in place and return the same
/// handle. Removing a handle removes its whole subtree.
pub trait CanvasAdapter {
    /// Measures the host element identified by `mount_id`.
    fn measure(&mut self, mount_id: &str) -> ChartResult<ContainerSize>;

    /// Creates the root drawing surface inside the host element.
    fn create_surface(&mut self, mount_id: &str, size: ContainerSize)
    -> ChartResult<ElementHandle>;

    fn resize_surface(&mut self, surface: ElementHandle, size: ContainerSize) -> ChartResult<()>;

    fn upsert_group(
        &mut self,
        slot: ElementSlot<'_>,
        group: &GroupDescriptor,
    ) -> ChartResult<ElementHandle>;

    fn upsert_axis(
        &mut self,
        slot: ElementSlot<'_>,
        axis: &AxisDescriptor,
    ) -> ChartResult<ElementHandle>;

    fn upsert_path(
        &mut self,
        slot: ElementSlot<'_>,
        path: &PathDescriptor,
    ) -> ChartResult<ElementHandle>;

    fn upsert_rect(
        &mut self,
        slot: ElementSlot<'_>,
        rect: &RectDescriptor,
    ) -> ChartResult<ElementHandle>;

    fn upsert_circle(
        &mut self,
        slot: ElementSlot<'_>,
        circle: &CircleDescriptor,
    ) -> ChartResult<ElementHandle>;

    fn remove_handle(&mut self, handle: ElementHandle) -> ChartResult<()>;
}

/// Dispatches one element descriptor to the matching adapter primitive.
pub fn upsert_element<A: CanvasAdapter + ?Sized>(
    adapter: &mut A,
    slot: ElementSlot<'_>,
    element: &Element,
) -> ChartResult<ElementHandle> {
    match element {
        Element::Group(group) => adapter.upsert_group(slot, group),
        Element::Axis(axis) => adapter.upsert_axis(slot, axis),
        Element::Path(path) => adapter.upsert_path(slot, path),
        Element::Rect(rect) => adapter.upsert_rect(slot, rect),
        Element::Circle(circle) => adapter.upsert_circle(slot, circle),
    }
}
