//! Aggregation engine
//!
//! Reduces a record subset into an ordered (label, value) series grouped by
//! one dimension. All operations are total: empty subsets yield zero-valued
//! series, never errors.

use std::collections::HashMap;
use tracing::{debug, instrument};
use viewboard_common::{Dimension, ViewRecord};

/// How group values are reduced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Sum the viewership measure per group (bar/pie charts)
    SumViewership,
    /// Count records per group
    Count,
}

/// The label universe a series is computed over
#[derive(Debug, Clone, Copy)]
pub enum Axis<'a> {
    /// Labels observed in the subset, in the dimension's display order
    Observed,
    /// A fixed category axis: every label appears, zero-valued when the
    /// subset has no records for it, so charts never silently omit
    /// categories
    Fixed(&'a [String]),
}

/// One (label, value) pair of a series
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

/// Ordered series of grouped aggregates, ready for charting
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AggregateSeries {
    pub dimension: Dimension,
    pub points: Vec<SeriesPoint>,
}

impl AggregateSeries {
    /// Sum of all point values
    pub fn total(&self) -> u64 {
        self.points.iter().map(|point| point.value).sum()
    }

    /// Value for a label, if present in the series
    pub fn value_of(&self, label: &str) -> Option<u64> {
        self.points
            .iter()
            .find(|point| point.label == label)
            .map(|point| point.value)
    }

    /// Labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|point| point.label.as_str())
    }

    /// Largest point value, 0 for an empty series
    pub fn max_value(&self) -> u64 {
        self.points.iter().map(|point| point.value).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Group a record subset by one dimension and reduce per group
///
/// With `Axis::Fixed` the given labels define membership and order; with
/// `Axis::Observed` the labels present in the subset are used, ordered
/// canonically where the dimension defines an order and lexicographically
/// otherwise.
#[instrument(skip(records, axis), fields(group_by = %group_by))]
pub fn aggregate<'r>(
    records: impl IntoIterator<Item = &'r ViewRecord>,
    group_by: Dimension,
    reducer: Reducer,
    axis: Axis<'_>,
) -> AggregateSeries {
    let mut totals: HashMap<String, u64> = HashMap::new();
    let mut observed: Vec<String> = Vec::new();

    for record in records {
        let label = record.field(group_by);
        let weight = match reducer {
            Reducer::SumViewership => record.viewership,
            Reducer::Count => 1,
        };
        match totals.get_mut(label) {
            Some(total) => *total += weight,
            None => {
                totals.insert(label.to_string(), weight);
                observed.push(label.to_string());
            }
        }
    }

    let labels: Vec<String> = match axis {
        Axis::Fixed(labels) => labels.to_vec(),
        Axis::Observed => order_observed(group_by, observed),
    };

    let points = labels
        .into_iter()
        .map(|label| {
            let value = totals.get(&label).copied().unwrap_or(0);
            SeriesPoint { label, value }
        })
        .collect();

    let series = AggregateSeries {
        dimension: group_by,
        points,
    };
    debug!(points = series.points.len(), total = series.total(), "Series aggregated");
    series
}

/// Display order for observed labels: canonical where defined, otherwise
/// lexicographic. Labels outside the canonical set sort after it.
fn order_observed(dimension: Dimension, mut observed: Vec<String>) -> Vec<String> {
    match dimension.canonical_order() {
        Some(canonical) => {
            observed.sort();
            let mut ordered: Vec<String> = canonical
                .iter()
                .filter(|label| observed.iter().any(|o| o == *label))
                .map(|label| label.to_string())
                .collect();
            ordered.extend(
                observed
                    .into_iter()
                    .filter(|label| !canonical.contains(&label.as_str())),
            );
            ordered
        }
        None => {
            observed.sort();
            observed
        }
    }
}
