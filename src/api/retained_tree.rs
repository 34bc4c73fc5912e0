use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::reconcile;
use crate::error::ChartResult;
use crate::render::{
    CanvasAdapter, ElementHandle, ElementKey, ElementSlot, VisualElement, upsert_element,
};

/// Element counts touched by one update cycle, summed over every nesting level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileStats {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

impl ReconcileStats {
    #[must_use]
    pub fn total(self) -> usize {
        self.entered + self.updated + self.exited
    }
}

/// Adapter handle of a live element plus its keyed children.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct RetainedElement {
    pub handle: ElementHandle,
    pub children: IndexMap<ElementKey, RetainedElement>,
}

impl RetainedElement {
    fn new(handle: ElementHandle) -> Self {
        Self {
            handle,
            children: IndexMap::new(),
        }
    }
}

/// Brings the live children of `parent` in line with `next`.
///
/// Each nesting level is reconciled on its own keys: exiting elements are
/// removed with their subtree, persisting ones refreshed in place and
/// entering ones created. `retained` stays consistent with the adapter up to
/// the first failing call.
pub(super) fn sync_children<A: CanvasAdapter + ?Sized>(
    adapter: &mut A,
    parent: ElementHandle,
    retained: &mut IndexMap<ElementKey, RetainedElement>,
    next: &[VisualElement],
    stats: &mut ReconcileStats,
) -> ChartResult<()> {
    let delta = reconcile(
        retained.keys().cloned().collect::<Vec<_>>(),
        next.iter().map(|element| element.key.clone()),
    )?;
    trace!(
        parent = parent.raw(),
        entering = delta.entering.len(),
        persisting = delta.persisting.len(),
        exiting = delta.exiting.len(),
        "reconcile level"
    );

    for key in &delta.exiting {
        if let Some(exiting) = retained.get(key) {
            adapter.remove_handle(exiting.handle)?;
            retained.shift_remove(key);
        }
    }
    stats.entered += delta.entering.len();
    stats.updated += delta.persisting.len();
    stats.exited += delta.exiting.len();

    for element in next {
        let existing = retained.get(&element.key).map(|live| live.handle);
        let handle = upsert_element(
            adapter,
            ElementSlot {
                parent,
                key: &element.key,
                existing,
            },
            &element.element,
        )?;
        let live = retained
            .entry(element.key.clone())
            .or_insert_with(|| RetainedElement::new(handle));
        sync_children(adapter, handle, &mut live.children, &element.children, stats)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::{ReconcileStats, sync_children};
    use crate::core::ContainerSize;
    use crate::render::{
        CanvasAdapter, Element, ElementKey, ElementRole, GroupDescriptor, RecordingCanvas,
        RectDescriptor, VisualElement,
    };

    fn column(name: &str, height: f64) -> VisualElement {
        VisualElement::leaf(
            ElementKey::series(ElementRole::Column, name),
            Element::Rect(RectDescriptor {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height,
                fill: "#000".to_owned(),
            }),
        )
    }

    fn layer(columns: Vec<VisualElement>) -> Vec<VisualElement> {
        vec![VisualElement::group(
            ElementKey::unique(ElementRole::ColumnLayer),
            GroupDescriptor::plain(),
            columns,
        )]
    }

    #[test]
    fn persisting_elements_keep_their_handles() {
        let size = ContainerSize::new(100.0, 100.0);
        let mut canvas = RecordingCanvas::new().with_mount("#chart", size);
        let surface = canvas.create_surface("#chart", size).expect("surface");
        let mut retained = IndexMap::new();

        let mut stats = ReconcileStats::default();
        let first = layer(vec![column("A", 10.0), column("B", 20.0)]);
        sync_children(&mut canvas, surface, &mut retained, &first, &mut stats).expect("first");
        assert_eq!(stats.entered, 3);
        let handle_a = retained[0].children[0].handle;

        let mut stats = ReconcileStats::default();
        let second = layer(vec![column("A", 15.0), column("C", 5.0)]);
        sync_children(&mut canvas, surface, &mut retained, &second, &mut stats).expect("second");
        assert_eq!(
            stats,
            ReconcileStats {
                entered: 1,
                updated: 2,
                exited: 1,
            }
        );
        assert_eq!(retained[0].children[0].handle, handle_a);
        assert_eq!(canvas.find_by_class("column").len(), 2);
    }
}
