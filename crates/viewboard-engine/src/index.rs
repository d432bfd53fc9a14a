//! Dimension indexer
//!
//! Derives sorted distinct value sets per categorical dimension and the
//! country-to-continent lookup, in a single pass over the batch at load
//! time. Pure function of the batch; an empty batch yields empty value sets.

use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};
use viewboard_common::{Dimension, ViewRecord};

/// Distinct value sets and the country→continent lookup for one batch
#[derive(Debug, Clone)]
pub struct DimensionIndex {
    values: HashMap<Dimension, Vec<String>>,
    continent_by_country: HashMap<String, String>,
}

impl DimensionIndex {
    /// Build the index by scanning the batch once
    ///
    /// The country→continent relation is expected to be many-to-one. When a
    /// record contradicts the continent first seen for its country, the
    /// first match is kept and the conflict is logged as a data-quality
    /// warning.
    pub fn build(records: &[ViewRecord]) -> Self {
        let mut sets: HashMap<Dimension, BTreeSet<String>> = HashMap::new();
        let mut continent_by_country: HashMap<String, String> = HashMap::new();

        for record in records {
            for dimension in Dimension::ALL {
                sets.entry(dimension)
                    .or_default()
                    .insert(record.field(dimension).to_string());
            }

            match continent_by_country.get(&record.country) {
                None => {
                    continent_by_country
                        .insert(record.country.clone(), record.continent.clone());
                }
                Some(first) if first != &record.continent => {
                    warn!(
                        country = %record.country,
                        kept = %first,
                        conflicting = %record.continent,
                        "Country maps to conflicting continents; keeping first-seen value"
                    );
                }
                Some(_) => {}
            }
        }

        let values = Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let observed = sets.remove(&dimension).unwrap_or_default();
                (dimension, order_values(dimension, observed))
            })
            .collect();

        debug!(
            countries = continent_by_country.len(),
            "Dimension index built"
        );

        Self {
            values,
            continent_by_country,
        }
    }

    /// Index assembled from pre-computed parts, for exercising data the
    /// single-pass build cannot produce (e.g. a country mapping outside the
    /// global continent set)
    #[cfg(test)]
    pub(crate) fn from_parts(
        values: HashMap<Dimension, Vec<String>>,
        continent_by_country: HashMap<String, String>,
    ) -> Self {
        Self {
            values,
            continent_by_country,
        }
    }

    /// Sorted distinct values present in the batch for a dimension
    pub fn distinct_values(&self, dimension: Dimension) -> &[String] {
        self.values
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Continent mapped to a country, if the country appears in the batch
    ///
    /// Deterministic and stable across calls; a miss resolves to "no
    /// restriction" at the filter layer rather than an error.
    pub fn continent_of(&self, country: &str) -> Option<&str> {
        self.continent_by_country.get(country).map(String::as_str)
    }
}

/// Stable display order: canonical order where the dimension defines one,
/// lexicographic otherwise. Labels outside the canonical set sort after it.
fn order_values(dimension: Dimension, observed: BTreeSet<String>) -> Vec<String> {
    match dimension.canonical_order() {
        Some(canonical) => {
            let mut ordered: Vec<String> = canonical
                .iter()
                .filter(|label| observed.contains(**label))
                .map(|label| label.to_string())
                .collect();
            ordered.extend(
                observed
                    .into_iter()
                    .filter(|label| !canonical.contains(&label.as_str())),
            );
            ordered
        }
        None => observed.into_iter().collect(),
    }
}
