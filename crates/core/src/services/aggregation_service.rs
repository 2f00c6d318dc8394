use crate::errors::CoreError;
use crate::models::category::CategoryRegistry;
use crate::models::trip::TripEntry;

/// Reduces the trip-entry list into per-category aggregates.
///
/// Every reduction returns a vector of exactly registry length,
/// index-aligned to the registry order, zero-filled for categories with
/// no matching entries. The three results are computed independently but
/// share one positional contract: row *i* refers to the same category in
/// every chart. An entry whose category is not in the registry fails the
/// whole pass — silently skipping it would break that alignment.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Total spend per category.
    ///
    /// Sums base `price` only; extra prices are a per-entry
    /// presentational add-on and stay out of the aggregate.
    pub fn spend_by_category(
        &self,
        entries: &[TripEntry],
        registry: &CategoryRegistry,
    ) -> Result<Vec<f64>, CoreError> {
        self.reduce(entries, registry, |entry| entry.price)
    }

    /// Number of entries per category.
    pub fn count_by_category(
        &self,
        entries: &[TripEntry],
        registry: &CategoryRegistry,
    ) -> Result<Vec<f64>, CoreError> {
        self.reduce(entries, registry, |_| 1.0)
    }

    /// Total time spent per category, in milliseconds.
    ///
    /// Raw unit only — conversion into a human label is the formatter's
    /// job at render time.
    pub fn duration_by_category(
        &self,
        entries: &[TripEntry],
        registry: &CategoryRegistry,
    ) -> Result<Vec<f64>, CoreError> {
        self.reduce(entries, registry, |entry| entry.duration_ms() as f64)
    }

    fn reduce(
        &self,
        entries: &[TripEntry],
        registry: &CategoryRegistry,
        value: impl Fn(&TripEntry) -> f64,
    ) -> Result<Vec<f64>, CoreError> {
        let mut totals = vec![0.0; registry.len()];
        for entry in entries {
            let index = registry.position(entry.category).ok_or_else(|| {
                CoreError::UnregisteredCategory {
                    category: entry.category.to_string(),
                }
            })?;
            totals[index] += value(entry);
        }
        Ok(totals)
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
