use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisKind, Body, ContainerSize, compute_body};
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasAdapter, ElementHandle, ElementKey, Scene};

use super::retained_tree::{ReconcileStats, RetainedElement, sync_children};
use super::{ChartConfig, ChartConfigPatch, ChartVariant};

/// Creation-time choices that cannot change over the chart's life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSetup {
    /// Host element identifier handed to the canvas adapter.
    pub mount_id: String,
    pub variant: ChartVariant,
    /// Bottom axis kind for line charts; point when absent.
    #[serde(default)]
    pub category_axis: Option<AxisKind>,
}

impl ChartSetup {
    #[must_use]
    pub fn new(mount_id: impl Into<String>, variant: ChartVariant) -> Self {
        Self {
            mount_id: mount_id.into(),
            variant,
            category_axis: None,
        }
    }

    #[must_use]
    pub fn with_category_axis(mut self, kind: AxisKind) -> Self {
        self.category_axis = Some(kind);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartState {
    Uninitialized,
    Mounted,
    Rendered,
    Destroyed,
}

/// A chart instance bound to one canvas adapter.
///
/// Lifecycle: `new` (uninitialized) -> `mount` (once) -> `update` (any number
/// of times) -> `destroy` (terminal). Each update reruns layout, axis
/// resolution and mark geometry in that order, then applies only the
/// reconciled delta to the adapter.
pub struct Chart<A: CanvasAdapter> {
    adapter: A,
    setup: ChartSetup,
    config: ChartConfig,
    state: ChartState,
    surface: Option<ElementHandle>,
    retained: IndexMap<ElementKey, RetainedElement>,
    scene: Option<Scene>,
}

impl<A: CanvasAdapter> Chart<A> {
    /// Builds an uninitialized chart; nothing touches the adapter yet.
    pub fn new(adapter: A, setup: ChartSetup, patch: ChartConfigPatch) -> ChartResult<Self> {
        let mut config = ChartConfig::default();
        setup
            .variant
            .configure_axes(&mut config, setup.category_axis);
        config.merge(patch)?;

        Ok(Self {
            adapter,
            setup,
            config,
            state: ChartState::Uninitialized,
            surface: None,
            retained: IndexMap::new(),
            scene: None,
        })
    }

    /// Builds, mounts and renders a chart in one call.
    pub fn create(adapter: A, setup: ChartSetup, patch: ChartConfigPatch) -> ChartResult<Self> {
        let mut chart = Self::new(adapter, setup, patch)?;
        chart.mount()?;
        chart.update(None)?;
        Ok(chart)
    }

    /// Merges `patch` without rendering.
    pub fn set_config(&mut self, patch: ChartConfigPatch) -> ChartResult<()> {
        self.ensure_not_destroyed()?;
        self.config.merge(patch)?;
        debug!(datasets = self.config.datasets.len(), "chart config merged");
        Ok(())
    }

    /// Measures the host element and creates the drawing surface.
    pub fn mount(&mut self) -> ChartResult<()> {
        match self.state {
            ChartState::Uninitialized => {}
            ChartState::Mounted | ChartState::Rendered => return Err(ChartError::AlreadyMounted),
            ChartState::Destroyed => return Err(ChartError::Destroyed),
        }

        let size = self.adapter.measure(&self.setup.mount_id)?;
        let surface = self.adapter.create_surface(&self.setup.mount_id, size)?;
        debug!(
            mount_id = %self.setup.mount_id,
            variant = ?self.setup.variant,
            width = size.width,
            height = size.height,
            "chart mounted"
        );
        self.surface = Some(surface);
        self.state = ChartState::Mounted;
        Ok(())
    }

    /// Merges `patch` when given, then re-renders against the current
    /// container size.
    pub fn update(&mut self, patch: Option<ChartConfigPatch>) -> ChartResult<ReconcileStats> {
        self.ensure_not_destroyed()?;
        let surface = self.surface.ok_or(ChartError::NotMounted)?;
        if let Some(patch) = patch {
            self.set_config(patch)?;
        }

        let size = self.adapter.measure(&self.setup.mount_id)?;
        self.adapter.resize_surface(surface, size)?;
        let scene = self.render_scene(size)?;

        let mut stats = ReconcileStats::default();
        sync_children(
            &mut self.adapter,
            surface,
            &mut self.retained,
            std::slice::from_ref(&scene.root),
            &mut stats,
        )?;
        debug!(
            variant = ?self.setup.variant,
            body_width = scene.body.width,
            body_height = scene.body.height,
            entered = stats.entered,
            updated = stats.updated,
            exited = stats.exited,
            "chart updated"
        );

        self.scene = Some(scene);
        self.state = ChartState::Rendered;
        Ok(stats)
    }

    /// Removes every element the chart owns. Later calls fail with
    /// [`ChartError::Destroyed`].
    pub fn destroy(&mut self) -> ChartResult<()> {
        self.ensure_not_destroyed()?;
        if let Some(surface) = self.surface.take() {
            self.adapter.remove_handle(surface)?;
        }
        self.retained.clear();
        self.scene = None;
        self.state = ChartState::Destroyed;
        debug!(mount_id = %self.setup.mount_id, "chart destroyed");
        Ok(())
    }

    fn render_scene(&self, size: ContainerSize) -> ChartResult<Scene> {
        let body = compute_body(size, self.config.margins);
        let scene = self.setup.variant.build_scene(&self.config, body);
        scene.validate()?;
        Ok(scene)
    }

    fn ensure_not_destroyed(&self) -> ChartResult<()> {
        if self.state == ChartState::Destroyed {
            Err(ChartError::Destroyed)
        } else {
            Ok(())
        }
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        self.state
    }

    #[must_use]
    pub fn setup(&self) -> &ChartSetup {
        &self.setup
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Scene of the last successful update.
    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn body(&self) -> Option<Body> {
        self.scene.as_ref().map(|scene| scene.body)
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    #[must_use]
    pub fn into_adapter(self) -> A {
        self.adapter
    }
}
