use super::chart::ChartKind;

/// Default surface width in pixels, as emitted in the statistics markup
/// before any entry-driven resize.
pub const DEFAULT_SURFACE_WIDTH: u32 = 900;

/// An addressable drawing target, resolved by a stable string id from
/// within the mounted statistics markup.
///
/// The surface itself is opaque to this core: it only carries the id the
/// backend binds to and the width the lifecycle owner sets before
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSurface {
    id: String,
    width: u32,
}

impl RenderSurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: DEFAULT_SURFACE_WIDTH,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Resize the surface. Applied by the lifecycle owner before chart
    /// construction; the backend reads the width at construct time.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }
}

/// The drawing surfaces hosted by one mounted statistics view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSet {
    surfaces: Vec<RenderSurface>,
}

impl SurfaceSet {
    pub fn new(surfaces: Vec<RenderSurface>) -> Self {
        Self { surfaces }
    }

    /// The three standard surfaces, one per chart kind, keyed by the
    /// stable ids the statistics markup emits.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            surfaces: ChartKind::ALL
                .iter()
                .map(|kind| RenderSurface::new(kind.surface_id()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RenderSurface> {
        self.surfaces.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut RenderSurface> {
        self.surfaces.iter_mut().find(|s| s.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
