use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::TripCategory;

/// An optional paid add-on attached to a trip entry.
///
/// Extra prices are shown on the per-entry view only; the spend
/// aggregate sums base prices alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub label: String,
    pub price: f64,
}

/// A single trip entry, consumed read-only by the statistics core.
///
/// Entries arrive already loaded and validated from the application
/// state. In particular `end_time >= start_time` and `price >= 0.0`
/// are the data source's responsibility, not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEntry {
    /// Unique identifier
    pub id: Uuid,

    /// Classification value — must be registered in the active
    /// [`CategoryRegistry`](super::category::CategoryRegistry) for
    /// aggregation to succeed
    pub category: TripCategory,

    /// Display name of the destination
    pub destination_name: String,

    /// Start instant
    pub start_time: DateTime<Utc>,

    /// End instant (never before `start_time`)
    pub end_time: DateTime<Utc>,

    /// Base price, excluding extras
    pub price: f64,

    /// Ordered add-ons
    #[serde(default)]
    pub extras: Vec<Extra>,

    #[serde(default)]
    pub is_favorite: bool,
}

impl TripEntry {
    pub fn new(
        category: TripCategory,
        destination_name: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            destination_name: destination_name.into(),
            start_time,
            end_time,
            price,
            extras: Vec::new(),
            is_favorite: false,
        }
    }

    /// Create an entry with extras attached.
    pub fn with_extras(
        category: TripCategory,
        destination_name: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        price: f64,
        extras: Vec<Extra>,
    ) -> Self {
        Self {
            extras,
            ..Self::new(category, destination_name, start_time, end_time, price)
        }
    }

    /// Time spent on this entry, in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        (self.end_time - self.start_time).num_milliseconds()
    }
}
