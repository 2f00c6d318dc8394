use crate::errors::CoreError;
use crate::models::chart::ChartConfig;
use crate::models::surface::RenderSurface;

/// Trait abstraction over the consumed charting library.
///
/// The statistics core never draws: it hands a surface and a config to
/// the backend and owns the returned handle until disposal. Swapping
/// the charting library means swapping one implementation of this
/// trait — the rest of the codebase is untouched.
pub trait ChartBackend {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Construct one chart on the given surface.
    ///
    /// The returned handle is exclusively owned by the caller and valid
    /// until its `dispose` call. Construction is atomic: on `Err` the
    /// backend must leave no live instance behind on the surface.
    fn construct(
        &self,
        surface: &RenderSurface,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartHandle>, CoreError>;
}

/// An opaque live chart instance.
///
/// Not shared, not serializable; valid only between construction and
/// disposal.
pub trait ChartHandle {
    /// Release the backend rendering resources held by this instance.
    /// The owning view calls this exactly once before dropping the
    /// handle.
    fn dispose(&mut self);
}
