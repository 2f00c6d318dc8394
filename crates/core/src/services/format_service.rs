//! Per-datapoint value label formatting.
//!
//! Pure functions of the raw value only — no chart state, no side
//! effects. The lifecycle owner hands them to the backend as the
//! per-point label callback, so each may be invoked once per rendered
//! data point per redraw.

use crate::models::chart::ChartKind;

const MS_PER_MINUTE: f64 = 60_000.0;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

/// Currency label for the money chart, e.g. `€ 120`.
///
/// Keeps the value's own precision: `99.5` renders as `€ 99.5`.
pub fn format_money(value: f64) -> String {
    format!("€ {value}")
}

/// Multiplicity label for the type chart, e.g. `3x`.
pub fn format_count(value: f64) -> String {
    format!("{value}x")
}

/// Duration label for the time chart, from a raw millisecond value.
///
/// Policy (fixed, floor division to whole minutes):
/// - under one hour: bare minutes, `42M`;
/// - one hour up to one day: zero-padded hours and minutes, `01H 10M`
///   (exactly 60 minutes renders `01H 00M`);
/// - one day or more: a day component in front, `02D 03H 15M`.
pub fn format_time_spent(ms: f64) -> String {
    let total_minutes = ((ms / MS_PER_MINUTE).floor() as i64).max(0);
    let minutes = total_minutes % MINUTES_PER_HOUR;
    let total_hours = total_minutes / MINUTES_PER_HOUR;
    let hours = total_hours % HOURS_PER_DAY;
    let days = total_hours / HOURS_PER_DAY;

    if days > 0 {
        format!("{days:02}D {hours:02}H {minutes:02}M")
    } else if total_hours > 0 {
        format!("{hours:02}H {minutes:02}M")
    } else {
        format!("{minutes}M")
    }
}

/// The per-point label callback for a chart kind.
pub fn label_formatter(kind: ChartKind) -> fn(f64) -> String {
    match kind {
        ChartKind::Money => format_money,
        ChartKind::Type => format_count,
        ChartKind::Time => format_time_spent,
    }
}
