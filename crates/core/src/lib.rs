//! Trip statistics core: per-category aggregation, value labels, and
//! chart lifecycle for a mounted statistics view.
//!
//! The crate reduces an ordered list of trip entries into three
//! aggregates (spend, frequency, time spent), all index-aligned to one
//! shared [`CategoryRegistry`], formats raw values into on-bar labels,
//! and owns the three chart instances drawn by an external charting
//! backend. The backend is consumed behind the [`ChartBackend`] trait —
//! this core computes, the backend draws.

pub mod backend;
pub mod errors;
pub mod models;
pub mod services;
pub mod view;

pub use backend::traits::{ChartBackend, ChartHandle};
pub use errors::CoreError;
pub use models::category::{CategoryRegistry, TripCategory};
pub use models::chart::{BarOrientation, ChartConfig, ChartKind, TripTotals};
pub use models::surface::{RenderSurface, SurfaceSet, DEFAULT_SURFACE_WIDTH};
pub use models::trip::{Extra, TripEntry};
pub use services::aggregation_service::AggregationService;
pub use services::chart_service::ChartService;
pub use view::StatsView;
