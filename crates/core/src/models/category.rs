use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A trip-entry classification value.
///
/// The variant order of [`TripCategory::ALL`] is the canonical axis
/// order shared by all three statistics charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripCategory {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    Flight,
    /// Accommodation check-in
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl TripCategory {
    /// Canonical category order, as rendered on every chart axis.
    pub const ALL: [TripCategory; 9] = [
        TripCategory::Taxi,
        TripCategory::Bus,
        TripCategory::Train,
        TripCategory::Ship,
        TripCategory::Drive,
        TripCategory::Flight,
        TripCategory::CheckIn,
        TripCategory::Sightseeing,
        TripCategory::Restaurant,
    ];

    /// The on-axis label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            TripCategory::Taxi => "Taxi",
            TripCategory::Bus => "Bus",
            TripCategory::Train => "Train",
            TripCategory::Ship => "Ship",
            TripCategory::Drive => "Drive",
            TripCategory::Flight => "Flight",
            TripCategory::CheckIn => "Check-in",
            TripCategory::Sightseeing => "Sightseeing",
            TripCategory::Restaurant => "Restaurant",
        }
    }
}

impl std::fmt::Display for TripCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fixed, ordered sequence of categories shared by every aggregation,
/// formatting, and chart-construction call.
///
/// The order is significant: row *i* of each aggregate refers to the
/// category at position *i*, in all three charts. No caller may reorder
/// or filter a registry it was handed — build a new one instead and use
/// it everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegistry {
    categories: Vec<TripCategory>,
}

impl Default for CategoryRegistry {
    /// The full canonical registry in [`TripCategory::ALL`] order.
    fn default() -> Self {
        Self {
            categories: TripCategory::ALL.to_vec(),
        }
    }
}

impl CategoryRegistry {
    /// Build a registry from an explicit ordered category list.
    /// Rejects an empty list — a zero-length axis cannot host a chart.
    pub fn from_categories(categories: Vec<TripCategory>) -> Result<Self, CoreError> {
        if categories.is_empty() {
            return Err(CoreError::EmptyRegistry);
        }
        Ok(Self { categories })
    }

    /// Number of categories (and therefore the length of every aggregate).
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Index of a category within this registry, if registered.
    #[must_use]
    pub fn position(&self, category: TripCategory) -> Option<usize> {
        self.categories.iter().position(|c| *c == category)
    }

    /// The ordered category slice.
    #[must_use]
    pub fn categories(&self) -> &[TripCategory] {
        &self.categories
    }

    /// Axis labels in registry order, one per category.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.to_string()).collect()
    }
}
