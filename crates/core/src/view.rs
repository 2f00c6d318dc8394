use tracing::debug;

use crate::backend::traits::{ChartBackend, ChartHandle};
use crate::errors::CoreError;
use crate::models::category::CategoryRegistry;
use crate::models::chart::ChartKind;
use crate::models::surface::{SurfaceSet, DEFAULT_SURFACE_WIDTH};
use crate::models::trip::TripEntry;
use crate::services::chart_service::ChartService;

/// Horizontal surface pixels per trip entry. Wide entry sets stretch the
/// surface instead of compressing the bars.
const WIDTH_PER_ENTRY: u32 = 5;

/// Owns the three statistics charts bound to one mounted view.
///
/// Lifecycle per chart: ABSENT → RENDERED → ABSENT. The three instances
/// are always constructed together and disposed together; no partial
/// state is observable outside a transition. Every re-render disposes
/// and reconstructs all three from the current entry list — there is no
/// incremental update path, and a restore after unmount is
/// indistinguishable from a first mount.
pub struct StatsView {
    backend: Box<dyn ChartBackend>,
    registry: CategoryRegistry,
    chart_service: ChartService,
    money_chart: Option<Box<dyn ChartHandle>>,
    type_chart: Option<Box<dyn ChartHandle>>,
    time_chart: Option<Box<dyn ChartHandle>>,
}

impl std::fmt::Debug for StatsView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsView")
            .field("backend", &self.backend.name())
            .field("categories", &self.registry.len())
            .field("rendered", &self.is_rendered())
            .finish()
    }
}

impl StatsView {
    /// Create an unmounted view over the canonical category registry.
    pub fn new(backend: Box<dyn ChartBackend>) -> Self {
        Self::with_registry(backend, CategoryRegistry::default())
    }

    /// Create an unmounted view over an explicit registry. The same
    /// registry instance aligns all three aggregates and all three
    /// label axes.
    pub fn with_registry(backend: Box<dyn ChartBackend>, registry: CategoryRegistry) -> Self {
        Self {
            backend,
            registry,
            chart_service: ChartService::new(),
            money_chart: None,
            type_chart: None,
            time_chart: None,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// The minimal markup this view emits: one statistics section with
    /// three containers, each hosting one drawing surface bearing a
    /// stable id the backend resolves at mount time.
    #[must_use]
    pub fn markup(&self) -> String {
        let mut markup = String::from(
            "<section class=\"statistics\">\n  <h2 class=\"visually-hidden\">Trip statistics</h2>\n",
        );
        for kind in ChartKind::ALL {
            markup.push_str(&format!(
                "  <div class=\"statistics__item\">\n    <canvas class=\"statistics__chart\" id=\"{}\" width=\"{}\"></canvas>\n  </div>\n",
                kind.surface_id(),
                DEFAULT_SURFACE_WIDTH,
            ));
        }
        markup.push_str("</section>\n");
        markup
    }

    /// Mount (or re-render) the three charts from the current entries.
    ///
    /// Any live prior instances are disposed before new construction.
    /// The transition is atomic from the caller's perspective: on any
    /// error — missing surface, unregistered category, backend failure —
    /// nothing stays live and all three slots are left absent.
    pub fn mount(
        &mut self,
        entries: &[TripEntry],
        surfaces: &mut SurfaceSet,
    ) -> Result<(), CoreError> {
        // Prior instances must be gone before any new construction.
        self.unmount();

        // Resolve all three surfaces before constructing anything, so a
        // missing surface cannot leave a partial set of live charts.
        for kind in ChartKind::ALL {
            if !surfaces.contains(kind.surface_id()) {
                return Err(CoreError::MissingRenderSurface(
                    kind.surface_id().to_string(),
                ));
            }
        }

        // Aggregation for all three kinds runs before any construction.
        let mut configs = Vec::with_capacity(ChartKind::ALL.len());
        for kind in ChartKind::ALL {
            configs.push(self.chart_service.config_for(kind, entries, &self.registry)?);
        }

        let width = entries.len() as u32 * WIDTH_PER_ENTRY;

        let mut handles: Vec<Box<dyn ChartHandle>> = Vec::with_capacity(configs.len());
        for config in &configs {
            let surface = surfaces
                .get_mut(config.kind.surface_id())
                .ok_or_else(|| CoreError::MissingRenderSurface(config.kind.surface_id().to_string()))?;
            surface.set_width(width);
            match self.backend.construct(surface, config) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    // Roll back: a partial set of live charts must not
                    // survive a failed transition.
                    for mut handle in handles {
                        handle.dispose();
                    }
                    return Err(e);
                }
            }
        }

        // Handles arrive in ChartKind::ALL order: money, type, time.
        self.time_chart = handles.pop();
        self.type_chart = handles.pop();
        self.money_chart = handles.pop();

        debug!(entries = entries.len(), width, "statistics charts mounted");
        Ok(())
    }

    /// Restore after a state change. Identical to [`mount`](Self::mount):
    /// full disposal, full reconstruction.
    pub fn restore(
        &mut self,
        entries: &[TripEntry],
        surfaces: &mut SurfaceSet,
    ) -> Result<(), CoreError> {
        self.mount(entries, surfaces)
    }

    /// Dispose every live chart instance and clear its slot.
    ///
    /// Idempotent: disposing an already-absent chart is a no-op.
    pub fn unmount(&mut self) {
        let mut disposed = 0usize;
        for slot in [
            &mut self.money_chart,
            &mut self.type_chart,
            &mut self.time_chart,
        ] {
            if let Some(mut handle) = slot.take() {
                handle.dispose();
                disposed += 1;
            }
        }
        if disposed > 0 {
            debug!(disposed, "statistics charts disposed");
        }
    }

    /// True iff all three chart instances are live.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.money_chart.is_some() && self.type_chart.is_some() && self.time_chart.is_some()
    }
}

impl Drop for StatsView {
    /// Backend resources never outlive the owning view.
    fn drop(&mut self) {
        self.unmount();
    }
}
