use serde::{Deserialize, Serialize};

/// Which of the three statistics charts a value belongs to.
///
/// Also the render order: money first, then type, then time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Spend per category
    Money,
    /// Entry count per category
    Type,
    /// Time spent per category
    Time,
}

impl ChartKind {
    /// All three kinds, in render order.
    pub const ALL: [ChartKind; 3] = [ChartKind::Money, ChartKind::Type, ChartKind::Time];

    /// Stable identifier of the drawing surface this chart binds to.
    pub fn surface_id(self) -> &'static str {
        match self {
            ChartKind::Money => "money",
            ChartKind::Type => "type",
            ChartKind::Time => "time",
        }
    }

    /// Chart title as rendered alongside the axis.
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Money => "MONEY",
            ChartKind::Type => "TYPE",
            ChartKind::Time => "TIME",
        }
    }

    /// Minimum rendered bar length in surface pixels, so zero-valued
    /// categories still show a readable bar stub.
    pub fn min_bar_length(self) -> u32 {
        match self {
            ChartKind::Money | ChartKind::Type => 80,
            ChartKind::Time => 90,
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Bar layout of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarOrientation {
    /// Categories on the vertical axis, magnitude on the horizontal.
    /// The only layout this core emits.
    Horizontal,
    Vertical,
}

/// Everything the charting backend consumes to construct one chart.
///
/// `axis_labels` and `values` are index-aligned to one shared
/// [`CategoryRegistry`](super::category::CategoryRegistry): row *i* of
/// either refers to the registry's category *i*. Built only by
/// [`ChartService::config_for`](crate::services::chart_service::ChartService::config_for),
/// which guarantees the alignment.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: String,

    /// Category axis labels, in registry order
    pub axis_labels: Vec<String>,

    /// The single data series, index-aligned to `axis_labels`
    pub values: Vec<f64>,

    /// Pure per-datapoint label callback; invoked once per rendered
    /// data point per redraw
    pub format_label: fn(f64) -> String,

    pub orientation: BarOrientation,

    /// Category axis ticks are visible
    pub show_category_axis: bool,

    /// Value axis ticks are hidden; magnitudes are read from the on-bar
    /// labels
    pub show_value_axis: bool,

    /// Always false — values are shown as static on-bar labels instead
    pub show_legend: bool,

    /// Always false — values are shown as static on-bar labels instead
    pub show_tooltip: bool,

    /// Bar height in surface pixels
    pub bar_thickness: u32,

    pub min_bar_length: u32,
}

/// Whole-trip totals across every category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripTotals {
    /// Sum of base prices (extras excluded)
    pub total_price: f64,

    /// Number of trip entries
    pub entry_count: usize,

    /// Sum of per-entry durations, in milliseconds
    pub total_duration_ms: i64,
}
