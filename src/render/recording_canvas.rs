use std::collections::HashMap;

use indexmap::IndexMap;

use crate::core::ContainerSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    AxisDescriptor, CanvasAdapter, CircleDescriptor, ElementHandle, ElementKey, ElementSlot,
    GroupDescriptor, PathDescriptor, RectDescriptor,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedElement {
    Surface(ContainerSize),
    Group(GroupDescriptor),
    Axis(AxisDescriptor),
    Path(PathDescriptor),
    Rect(RectDescriptor),
    Circle(CircleDescriptor),
}

impl RecordedElement {
    fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Surface(_) => Ok(()),
            Self::Group(group) => group.validate(),
            Self::Axis(axis) => axis.validate(),
            Self::Path(path) => path.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Circle(circle) => circle.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedNode {
    pub parent: Option<ElementHandle>,
    pub key: Option<ElementKey>,
    pub element: RecordedElement,
    /// Number of in-place updates since creation.
    pub revision: u32,
}

/// In-memory canvas adapter used by tests and headless hosts.
///
/// It keeps the retained element tree, validates every descriptor it
/// receives and counts create/update/remove calls so callers can observe
/// exactly what a reconciliation pass did.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    mounts: HashMap<String, ContainerSize>,
    nodes: IndexMap<ElementHandle, RecordedNode>,
    next_handle: u64,
    pub created_count: usize,
    pub updated_count: usize,
    pub removed_count: usize,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a host element that `measure`/`create_surface` can find.
    #[must_use]
    pub fn with_mount(mut self, mount_id: impl Into<String>, size: ContainerSize) -> Self {
        self.mounts.insert(mount_id.into(), size);
        self
    }

    /// Simulates a host resize; the next update measures the new size.
    pub fn set_container_size(&mut self, mount_id: &str, size: ContainerSize) {
        self.mounts.insert(mount_id.to_owned(), size);
    }

    pub fn reset_counters(&mut self) {
        self.created_count = 0;
        self.updated_count = 0;
        self.removed_count = 0;
    }

    #[must_use]
    pub fn node(&self, handle: ElementHandle) -> Option<&RecordedNode> {
        self.nodes.get(&handle)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn children(&self, parent: ElementHandle) -> Vec<ElementHandle> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent == Some(parent))
            .map(|(handle, _)| *handle)
            .collect()
    }

    /// Live elements whose role carries `class_name`, in creation order.
    #[must_use]
    pub fn find_by_class(&self, class_name: &str) -> Vec<(ElementHandle, &RecordedNode)> {
        self.nodes
            .iter()
            .filter(|(_, node)| {
                node.key
                    .as_ref()
                    .is_some_and(|key| key.role.class_name() == class_name)
            })
            .map(|(handle, node)| (*handle, node))
            .collect()
    }

    fn allocate(&mut self) -> ElementHandle {
        self.next_handle += 1;
        ElementHandle::new(self.next_handle)
    }

    fn upsert(
        &mut self,
        slot: ElementSlot<'_>,
        element: RecordedElement,
    ) -> ChartResult<ElementHandle> {
        element.validate()?;

        if let Some(handle) = slot.existing {
            let node = self.nodes.get_mut(&handle).ok_or_else(|| {
                ChartError::Adapter(format!("unknown element handle {}", handle.raw()))
            })?;
            node.element = element;
            node.revision += 1;
            self.updated_count += 1;
            return Ok(handle);
        }

        if !self.nodes.contains_key(&slot.parent) {
            return Err(ChartError::Adapter(format!(
                "unknown parent handle {}",
                slot.parent.raw()
            )));
        }
        let handle = self.allocate();
        self.nodes.insert(
            handle,
            RecordedNode {
                parent: Some(slot.parent),
                key: Some(slot.key.clone()),
                element,
                revision: 0,
            },
        );
        self.created_count += 1;
        Ok(handle)
    }
}

impl CanvasAdapter for RecordingCanvas {
    fn measure(&mut self, mount_id: &str) -> ChartResult<ContainerSize> {
        self.mounts
            .get(mount_id)
            .copied()
            .ok_or_else(|| ChartError::Adapter(format!("mount point `{mount_id}` not found")))
    }

    fn create_surface(
        &mut self,
        mount_id: &str,
        size: ContainerSize,
    ) -> ChartResult<ElementHandle> {
        if !self.mounts.contains_key(mount_id) {
            return Err(ChartError::Adapter(format!(
                "mount point `{mount_id}` not found"
            )));
        }
        let handle = self.allocate();
        self.nodes.insert(
            handle,
            RecordedNode {
                parent: None,
                key: None,
                element: RecordedElement::Surface(size),
                revision: 0,
            },
        );
        Ok(handle)
    }

    fn resize_surface(&mut self, surface: ElementHandle, size: ContainerSize) -> ChartResult<()> {
        match self.nodes.get_mut(&surface) {
            Some(node) => {
                node.element = RecordedElement::Surface(size);
                Ok(())
            }
            None => Err(ChartError::Adapter(format!(
                "unknown surface handle {}",
                surface.raw()
            ))),
        }
    }

    fn upsert_group(
        &mut self,
        slot: ElementSlot<'_>,
        group: &GroupDescriptor,
    ) -> ChartResult<ElementHandle> {
        self.upsert(slot, RecordedElement::Group(*group))
    }

    fn upsert_axis(
        &mut self,
        slot: ElementSlot<'_>,
        axis: &AxisDescriptor,
    ) -> ChartResult<ElementHandle> {
        self.upsert(slot, RecordedElement::Axis(axis.clone()))
    }

    fn upsert_path(
        &mut self,
        slot: ElementSlot<'_>,
        path: &PathDescriptor,
    ) -> ChartResult<ElementHandle> {
        self.upsert(slot, RecordedElement::Path(path.clone()))
    }

    fn upsert_rect(
        &mut self,
        slot: ElementSlot<'_>,
        rect: &RectDescriptor,
    ) -> ChartResult<ElementHandle> {
        self.upsert(slot, RecordedElement::Rect(rect.clone()))
    }

    fn upsert_circle(
        &mut self,
        slot: ElementSlot<'_>,
        circle: &CircleDescriptor,
    ) -> ChartResult<ElementHandle> {
        self.upsert(slot, RecordedElement::Circle(circle.clone()))
    }

    fn remove_handle(&mut self, handle: ElementHandle) -> ChartResult<()> {
        if !self.nodes.contains_key(&handle) {
            return Err(ChartError::Adapter(format!(
                "unknown element handle {}",
                handle.raw()
            )));
        }

        let mut pending = vec![handle];
        while let Some(current) = pending.pop() {
            pending.extend(self.children(current));
            self.nodes.shift_remove(&current);
        }
        self.removed_count += 1;
        Ok(())
    }
}
