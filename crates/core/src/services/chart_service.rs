use crate::errors::CoreError;
use crate::models::category::CategoryRegistry;
use crate::models::chart::{BarOrientation, ChartConfig, ChartKind, TripTotals};
use crate::models::trip::TripEntry;
use crate::services::aggregation_service::AggregationService;
use crate::services::format_service;

/// Bar height shared by all three charts, in surface pixels.
const BAR_THICKNESS: u32 = 44;

/// Generates chart-ready configs from trip entries.
///
/// The core computes all the numbers — the rendering backend only draws.
/// Each config carries the registry labels, one aggregate series aligned
/// to them, the per-kind label formatter, and the fixed
/// horizontal-bar / no-legend / no-tooltip options.
pub struct ChartService {
    aggregation: AggregationService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            aggregation: AggregationService::new(),
        }
    }

    /// The aggregate series for one chart kind, index-aligned to the
    /// registry.
    pub fn series_for(
        &self,
        kind: ChartKind,
        entries: &[TripEntry],
        registry: &CategoryRegistry,
    ) -> Result<Vec<f64>, CoreError> {
        match kind {
            ChartKind::Money => self.aggregation.spend_by_category(entries, registry),
            ChartKind::Type => self.aggregation.count_by_category(entries, registry),
            ChartKind::Time => self.aggregation.duration_by_category(entries, registry),
        }
    }

    /// Build the full backend config for one chart kind.
    pub fn config_for(
        &self,
        kind: ChartKind,
        entries: &[TripEntry],
        registry: &CategoryRegistry,
    ) -> Result<ChartConfig, CoreError> {
        let values = self.series_for(kind, entries, registry)?;
        Ok(ChartConfig {
            kind,
            title: kind.title().to_string(),
            axis_labels: registry.labels(),
            values,
            format_label: format_service::label_formatter(kind),
            orientation: BarOrientation::Horizontal,
            show_category_axis: true,
            show_value_axis: false,
            show_legend: false,
            show_tooltip: false,
            bar_thickness: BAR_THICKNESS,
            min_bar_length: kind.min_bar_length(),
        })
    }

    /// Whole-trip totals across every category. Category-independent, so
    /// it cannot fail on an unregistered entry.
    #[must_use]
    pub fn totals(&self, entries: &[TripEntry]) -> TripTotals {
        TripTotals {
            total_price: entries.iter().map(|e| e.price).sum(),
            entry_count: entries.len(),
            total_duration_ms: entries.iter().map(TripEntry::duration_ms).sum(),
        }
    }

    /// Export the three aggregate series as JSON keyed by surface id,
    /// for frontends that render without the chart lifecycle owner.
    pub fn export_aggregates_json(
        &self,
        entries: &[TripEntry],
        registry: &CategoryRegistry,
    ) -> Result<String, CoreError> {
        let payload = serde_json::json!({
            "labels": registry.labels(),
            "money": self.series_for(ChartKind::Money, entries, registry)?,
            "type": self.series_for(ChartKind::Type, entries, registry)?,
            "time": self.series_for(ChartKind::Time, entries, registry)?,
        });
        serde_json::to_string_pretty(&payload).map_err(Into::into)
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
