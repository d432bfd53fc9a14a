//! Filter resolver
//!
//! Applies AND semantics across independent equality constraints over
//! disjoint dimensions, and keeps dependent selection controls (continent
//! implied by country) mutually consistent.

use crate::index::DimensionIndex;
use std::collections::HashMap;
use tracing::debug;
use viewboard_common::{Dimension, ViewRecord, ALL_CONTINENTS};

/// A set of active equality constraints, one per dimension at most
///
/// An unset dimension or a dimension set to its "all" sentinel imposes no
/// restriction. Constraint application is commutative: the same subset
/// results regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    constraints: HashMap<Dimension, String>,
}

impl FilterSet {
    /// An empty filter set (no restriction)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style constraint addition
    pub fn with(mut self, dimension: Dimension, value: impl Into<String>) -> Self {
        self.set(dimension, Some(value.into()));
        self
    }

    /// Set or clear the constraint for a dimension
    ///
    /// `None` and the dimension's "all" sentinel both clear the constraint.
    pub fn set(&mut self, dimension: Dimension, value: Option<String>) {
        match value {
            Some(v) if Some(v.as_str()) != dimension.all_sentinel() => {
                self.constraints.insert(dimension, v);
            }
            _ => {
                self.constraints.remove(&dimension);
            }
        }
    }

    /// The active constraint for a dimension, if any
    pub fn constraint(&self, dimension: Dimension) -> Option<&str> {
        self.constraints.get(&dimension).map(String::as_str)
    }

    /// Whether no constraints are active
    pub fn is_unrestricted(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Whether a record satisfies every active constraint
    pub fn matches(&self, record: &ViewRecord) -> bool {
        self.constraints
            .iter()
            .all(|(dimension, value)| record.field(*dimension) == value)
    }

    /// Compute the filtered subset of a batch
    pub fn apply<'a>(&self, records: &'a [ViewRecord]) -> Vec<&'a ViewRecord> {
        let filtered: Vec<&ViewRecord> =
            records.iter().filter(|record| self.matches(record)).collect();
        debug!(
            constraints = self.constraints.len(),
            input = records.len(),
            output = filtered.len(),
            "Filter applied"
        );
        filtered
    }
}

/// Dependent-selection resolution over an indexed batch
///
/// Selecting a country forces or restricts the continent control; clearing
/// it restores the full option list.
#[derive(Debug, Clone, Copy)]
pub struct SelectionResolver<'a> {
    index: &'a DimensionIndex,
}

impl<'a> SelectionResolver<'a> {
    pub fn new(index: &'a DimensionIndex) -> Self {
        Self { index }
    }

    /// The continent a country selection forces the dependent control to
    ///
    /// A lookup miss (stale selection, unknown country) resolves to `None`,
    /// meaning no restriction, rather than an error.
    pub fn implied_continent(&self, country: &str) -> Option<String> {
        self.index.continent_of(country).map(str::to_string)
    }

    /// Continent option list for a country selection, sentinel appended
    ///
    /// With no country selected the full distinct continent set is offered.
    /// With a country selected whose implied continent is missing from the
    /// global set (a data inconsistency), the implied value is still
    /// appended as a selectable option rather than dropped.
    pub fn continent_options(&self, selected_country: Option<&str>) -> Vec<String> {
        let mut options: Vec<String> = self
            .index
            .distinct_values(Dimension::Continent)
            .to_vec();

        if let Some(country) = selected_country {
            if let Some(implied) = self.implied_continent(country) {
                if !options.contains(&implied) {
                    options.push(implied);
                }
            }
        }

        options.push(ALL_CONTINENTS.to_string());
        options
    }

    /// Continent options restricted to values compatible with the country
    ///
    /// Used where the dependent control narrows instead of being forced:
    /// the global list is filtered to continents actually carried by records
    /// of the selected country.
    pub fn restricted_continent_options(
        &self,
        records: &[ViewRecord],
        selected_country: Option<&str>,
    ) -> Vec<String> {
        match selected_country {
            None => self.index.distinct_values(Dimension::Continent).to_vec(),
            Some(country) => {
                let compatible: Vec<&str> = records
                    .iter()
                    .filter(|record| record.country == country)
                    .map(|record| record.continent.as_str())
                    .collect();
                self.index
                    .distinct_values(Dimension::Continent)
                    .iter()
                    .filter(|continent| compatible.contains(&continent.as_str()))
                    .cloned()
                    .collect()
            }
        }
    }
}
