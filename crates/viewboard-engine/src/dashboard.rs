//! Per-tab dashboard views
//!
//! Pull-based recomputation: the hosting UI passes the current selection
//! state and receives freshly computed series, one per widget id. Nothing is
//! cached between calls; the only shared objects are the immutable record
//! store and its dimension index.

use crate::aggregate::{aggregate, AggregateSeries, Axis, Reducer};
use crate::filter::{FilterSet, SelectionResolver};
use crate::index::DimensionIndex;
use crate::store::RecordStore;
use crate::summary::{compute_summary, SummaryStats};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use viewboard_common::{Dimension, SessionId, AGE_BRACKETS, GENDERS};

/// Stable logical widget ids handed to the rendering surface
pub mod widget {
    pub const LOCATION_COUNTRY_MAP: &str = "location.country-map";
    pub const LOCATION_CONTINENT_BAR: &str = "location.continent-bar";
    pub const DEMOGRAPHIC_COUNTRY: &str = "demographic.country-breakdown";
    pub const DEMOGRAPHIC_CONTINENT: &str = "demographic.continent-breakdown";
    pub const PEAK_HOUR_COUNTRY: &str = "peak-hour.country-histogram";
    pub const PEAK_HOUR_CONTINENT: &str = "peak-hour.continent-histogram";
    pub const REFERRER_COUNTRY: &str = "referrer.country-breakdown";
    pub const REFERRER_CONTINENT: &str = "referrer.continent-breakdown";
    pub const DEVICE_COUNTRY: &str = "device.country-breakdown";
    pub const DEVICE_CONTINENT: &str = "device.continent-breakdown";
    pub const SUMMARY_TOTAL: &str = "summary.total";
    pub const SUMMARY_AVERAGE: &str = "summary.average";
    pub const SUMMARY_MAXIMUM: &str = "summary.maximum";
    pub const SUMMARY_MINIMUM: &str = "summary.minimum";
    pub const SUMMARY_TOP_CONTINENT: &str = "summary.top-continent";
    pub const SUMMARY_TOP_SPORT: &str = "summary.top-sport";
}

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Location,
    Demographic,
    PeakHour,
    Referrer,
    Device,
    Summary,
}

impl TabId {
    /// Whether the tab carries a continent control driven by the country
    /// selection
    pub fn has_dependent_continent(&self) -> bool {
        matches!(
            self,
            TabId::Demographic | TabId::PeakHour | TabId::Referrer | TabId::Device
        )
    }
}

/// Demographic breakdown choice for the demographic tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemographicChoice {
    #[default]
    Age,
    Gender,
}

impl DemographicChoice {
    pub fn dimension(&self) -> Dimension {
        match self {
            DemographicChoice::Age => Dimension::Age,
            DemographicChoice::Gender => Dimension::Gender,
        }
    }

    /// The fixed category axis the breakdown is computed over
    pub fn axis_labels(&self) -> Vec<String> {
        let labels: &[&str] = match self {
            DemographicChoice::Age => &AGE_BRACKETS,
            DemographicChoice::Gender => &GENDERS,
        };
        labels.iter().map(|label| label.to_string()).collect()
    }
}

/// Transient per-session selection state, one filter set per tab
///
/// Held for the lifetime of a user session and never persisted. Each session
/// owns its own state; the record store and index are shared read-only.
#[derive(Debug, Clone)]
pub struct SelectionState {
    session_id: SessionId,
    tabs: HashMap<TabId, FilterSet>,
    demographic: DemographicChoice,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            tabs: HashMap::new(),
            demographic: DemographicChoice::default(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// The active filter set for a tab (empty when nothing is selected)
    pub fn filters(&self, tab: TabId) -> FilterSet {
        self.tabs.get(&tab).cloned().unwrap_or_default()
    }

    pub fn filters_mut(&mut self, tab: TabId) -> &mut FilterSet {
        self.tabs.entry(tab).or_default()
    }

    pub fn demographic(&self) -> DemographicChoice {
        self.demographic
    }

    pub fn set_demographic(&mut self, choice: DemographicChoice) {
        self.demographic = choice;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Location tab output: choropleth-style series by country plus a continent
/// bar over the fixed continent axis
#[derive(Debug, Clone)]
pub struct LocationView {
    pub country_map: AggregateSeries,
    pub continent_bar: AggregateSeries,
}

/// Demographic tab output: the chosen breakdown computed twice, once under
/// the country filter and once under the continent filter
#[derive(Debug, Clone)]
pub struct DemographicView {
    pub choice: DemographicChoice,
    pub country_breakdown: AggregateSeries,
    pub continent_breakdown: AggregateSeries,
}

/// Peak-hour tab output: viewership over peak usage hours, country- and
/// continent-scoped
#[derive(Debug, Clone)]
pub struct PeakHourView {
    pub by_country: AggregateSeries,
    pub by_continent: AggregateSeries,
}

/// Referrer/device tab output: one breakdown per scope. The rendering
/// surface draws the country scope as a bar and the continent scope as a
/// pie.
#[derive(Debug, Clone)]
pub struct ScopedBreakdown {
    pub dimension: Dimension,
    pub by_country: AggregateSeries,
    pub by_continent: AggregateSeries,
}

/// Session-independent dashboard context: the immutable batch and its index
///
/// One instance serves every session; each interaction is a synchronous
/// recomputation pass over the shared batch.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: Arc<RecordStore>,
    index: DimensionIndex,
}

impl Dashboard {
    /// Index the batch once at load and keep both for the process lifetime
    pub fn new(store: Arc<RecordStore>) -> Self {
        let index = DimensionIndex::build(store.records());
        Self { store, index }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn index(&self) -> &DimensionIndex {
        &self.index
    }

    pub fn resolver(&self) -> SelectionResolver<'_> {
        SelectionResolver::new(&self.index)
    }

    /// Apply a control change, keeping dependent selections consistent
    ///
    /// Selecting a country on a tab with a continent control forces that
    /// control to the implied continent; clearing the country (or selecting
    /// an unknown one) clears it.
    pub fn select(
        &self,
        state: &mut SelectionState,
        tab: TabId,
        dimension: Dimension,
        value: Option<String>,
    ) {
        let forced_continent = if dimension == Dimension::Country && tab.has_dependent_continent() {
            Some(
                value
                    .as_deref()
                    .filter(|v| Some(*v) != Dimension::Country.all_sentinel())
                    .and_then(|country| self.resolver().implied_continent(country)),
            )
        } else {
            None
        };

        let filters = state.filters_mut(tab);
        filters.set(dimension, value);
        if let Some(implied) = forced_continent {
            filters.set(Dimension::Continent, implied);
        }
    }

    /// Continent option list for a tab's dependent control
    ///
    /// The peak-hour tab restricts the list to continents compatible with
    /// the selected country; the other tabs offer the full list (plus the
    /// implied value when it is missing from the global set) ending with the
    /// "all" sentinel.
    pub fn continent_options(&self, state: &SelectionState, tab: TabId) -> Vec<String> {
        let filters = state.filters(tab);
        let selected_country = filters.constraint(Dimension::Country);
        match tab {
            TabId::PeakHour => self
                .resolver()
                .restricted_continent_options(self.store.records(), selected_country),
            _ => self.resolver().continent_options(selected_country),
        }
    }

    /// Location tab: country map plus continent bar, with optional sport and
    /// country filters
    #[instrument(skip(self, state))]
    pub fn location(&self, state: &SelectionState) -> LocationView {
        let filters = state.filters(TabId::Location);

        let mut by_country = FilterSet::new();
        by_country.set(
            Dimension::Country,
            filters.constraint(Dimension::Country).map(str::to_string),
        );
        let country_scope = by_country.apply(self.store.records());

        let country_map = aggregate(
            country_scope.iter().copied(),
            Dimension::Country,
            Reducer::SumViewership,
            Axis::Observed,
        );

        // The sport filter narrows the continent bar only; the fixed axis
        // keeps every continent visible even at zero
        let sport_scope: Vec<_> = match filters.constraint(Dimension::Sport) {
            Some(sport) => country_scope
                .into_iter()
                .filter(|record| record.sport == sport)
                .collect(),
            None => country_scope,
        };
        let continent_bar = aggregate(
            sport_scope.into_iter(),
            Dimension::Continent,
            Reducer::SumViewership,
            Axis::Fixed(self.index.distinct_values(Dimension::Continent)),
        );

        LocationView {
            country_map,
            continent_bar,
        }
    }

    /// Demographic tab: the chosen breakdown under country and continent
    /// scopes, over a fixed axis
    #[instrument(skip(self, state))]
    pub fn demographic(&self, state: &SelectionState) -> DemographicView {
        let filters = state.filters(TabId::Demographic);
        let choice = state.demographic();
        let axis = choice.axis_labels();

        let country_breakdown = self.scoped_breakdown(
            choice.dimension(),
            Dimension::Country,
            filters.constraint(Dimension::Country),
            Axis::Fixed(&axis),
        );
        let continent_breakdown = self.scoped_breakdown(
            choice.dimension(),
            Dimension::Continent,
            filters.constraint(Dimension::Continent),
            Axis::Fixed(&axis),
        );

        DemographicView {
            choice,
            country_breakdown,
            continent_breakdown,
        }
    }

    /// Peak-hour tab: viewership over peak usage hours per scope
    #[instrument(skip(self, state))]
    pub fn peak_hour(&self, state: &SelectionState) -> PeakHourView {
        let filters = state.filters(TabId::PeakHour);

        PeakHourView {
            by_country: self.scoped_breakdown(
                Dimension::PeakHour,
                Dimension::Country,
                filters.constraint(Dimension::Country),
                Axis::Observed,
            ),
            by_continent: self.scoped_breakdown(
                Dimension::PeakHour,
                Dimension::Continent,
                filters.constraint(Dimension::Continent),
                Axis::Observed,
            ),
        }
    }

    /// Referrer tab: viewership by referrer per scope
    #[instrument(skip(self, state))]
    pub fn referrer(&self, state: &SelectionState) -> ScopedBreakdown {
        self.scoped_tab(TabId::Referrer, Dimension::Referrer, state)
    }

    /// Device tab: viewership by device per scope
    #[instrument(skip(self, state))]
    pub fn device(&self, state: &SelectionState) -> ScopedBreakdown {
        self.scoped_tab(TabId::Device, Dimension::Device, state)
    }

    /// Summary panel over the entire unfiltered batch
    #[instrument(skip(self))]
    pub fn summary(&self) -> SummaryStats {
        compute_summary(self.store.records())
    }

    fn scoped_tab(
        &self,
        tab: TabId,
        group_by: Dimension,
        state: &SelectionState,
    ) -> ScopedBreakdown {
        let filters = state.filters(tab);
        ScopedBreakdown {
            dimension: group_by,
            by_country: self.scoped_breakdown(
                group_by,
                Dimension::Country,
                filters.constraint(Dimension::Country),
                Axis::Observed,
            ),
            by_continent: self.scoped_breakdown(
                group_by,
                Dimension::Continent,
                filters.constraint(Dimension::Continent),
                Axis::Observed,
            ),
        }
    }

    /// One grouped series under a single optional scope constraint
    fn scoped_breakdown(
        &self,
        group_by: Dimension,
        scope: Dimension,
        selected: Option<&str>,
        axis: Axis<'_>,
    ) -> AggregateSeries {
        let mut filters = FilterSet::new();
        filters.set(scope, selected.map(str::to_string));
        let subset = filters.apply(self.store.records());
        aggregate(
            subset.into_iter(),
            group_by,
            Reducer::SumViewership,
            axis,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewboard_common::{ViewRecord, ALL_CONTINENTS, ALL_COUNTRIES};

    fn record(
        country: &str,
        continent: &str,
        sport: &str,
        age: &str,
        referrer: &str,
        device: &str,
        peak_hour: &str,
        viewership: u64,
    ) -> ViewRecord {
        ViewRecord {
            country: country.to_string(),
            continent: continent.to_string(),
            sport: sport.to_string(),
            age: age.to_string(),
            gender: "Male".to_string(),
            referrer: referrer.to_string(),
            device: device.to_string(),
            peak_hour: peak_hour.to_string(),
            viewership,
        }
    }

    fn dashboard() -> Dashboard {
        let records = vec![
            record("USA", "North America", "Swimming", "18-25", "Social", "Mobile", "18:00", 100),
            record("Brazil", "South America", "Swimming", "26-35", "Direct", "Desktop", "20:00", 50),
            record("France", "Europe", "Tennis", "36-45", "Search", "Tablet", "18:00", 25),
        ];
        Dashboard::new(Arc::new(RecordStore::new(records)))
    }

    #[test]
    fn test_location_view_unfiltered() {
        let board = dashboard();
        let view = board.location(&SelectionState::new());

        assert_eq!(view.country_map.value_of("USA"), Some(100));
        assert_eq!(view.country_map.value_of("Brazil"), Some(50));
        assert_eq!(view.continent_bar.value_of("North America"), Some(100));
        assert_eq!(view.continent_bar.value_of("Europe"), Some(25));
        assert_eq!(view.continent_bar.total(), 175);
    }

    #[test]
    fn test_location_sport_filter_keeps_continent_axis() {
        let board = dashboard();
        let mut state = SelectionState::new();
        board.select(
            &mut state,
            TabId::Location,
            Dimension::Sport,
            Some("Swimming".to_string()),
        );

        let view = board.location(&state);
        // Europe has no swimming records but stays on the axis at zero
        assert_eq!(view.continent_bar.value_of("Europe"), Some(0));
        assert_eq!(view.continent_bar.value_of("North America"), Some(100));
        assert_eq!(view.continent_bar.total(), 150);
    }

    #[test]
    fn test_demographic_fixed_age_axis_with_zeros() {
        let board = dashboard();
        let mut state = SelectionState::new();
        board.select(
            &mut state,
            TabId::Demographic,
            Dimension::Country,
            Some("USA".to_string()),
        );

        let view = board.demographic(&state);
        assert_eq!(view.country_breakdown.points.len(), 6);
        assert_eq!(view.country_breakdown.value_of("18-25"), Some(100));
        for bracket in &["26-35", "36-45", "46-55", "56-65", "66-70"] {
            assert_eq!(view.country_breakdown.value_of(bracket), Some(0));
        }
    }

    #[test]
    fn test_country_selection_forces_continent() {
        let board = dashboard();
        let mut state = SelectionState::new();

        board.select(
            &mut state,
            TabId::Demographic,
            Dimension::Country,
            Some("Brazil".to_string()),
        );
        assert_eq!(
            state
                .filters(TabId::Demographic)
                .constraint(Dimension::Continent),
            Some("South America")
        );

        // Clearing the country clears the forced continent
        board.select(&mut state, TabId::Demographic, Dimension::Country, None);
        assert!(state.filters(TabId::Demographic).is_unrestricted());
    }

    #[test]
    fn test_unknown_country_resolves_to_no_restriction() {
        let board = dashboard();
        let mut state = SelectionState::new();

        board.select(
            &mut state,
            TabId::Device,
            Dimension::Country,
            Some("Atlantis".to_string()),
        );
        // The country constraint stays, the continent is not forced
        let filters = state.filters(TabId::Device);
        assert_eq!(filters.constraint(Dimension::Country), Some("Atlantis"));
        assert_eq!(filters.constraint(Dimension::Continent), None);
    }

    #[test]
    fn test_sentinel_country_selection_is_unrestricted() {
        let board = dashboard();
        let mut state = SelectionState::new();

        board.select(
            &mut state,
            TabId::Referrer,
            Dimension::Country,
            Some(ALL_COUNTRIES.to_string()),
        );
        assert!(state.filters(TabId::Referrer).is_unrestricted());

        let view = board.referrer(&state);
        assert_eq!(view.by_country.total(), 175);
    }

    #[test]
    fn test_continent_options_per_tab() {
        let board = dashboard();
        let mut state = SelectionState::new();

        // Unselected: full list (plus sentinel outside the peak-hour tab)
        let options = board.continent_options(&state, TabId::Device);
        assert_eq!(options.last().map(String::as_str), Some(ALL_CONTINENTS));
        assert_eq!(options.len(), 4);

        board.select(
            &mut state,
            TabId::PeakHour,
            Dimension::Country,
            Some("USA".to_string()),
        );
        let restricted = board.continent_options(&state, TabId::PeakHour);
        assert_eq!(restricted, &["North America"]);

        // Clearing restores the full list
        board.select(&mut state, TabId::PeakHour, Dimension::Country, None);
        let restored = board.continent_options(&state, TabId::PeakHour);
        assert_eq!(restored, &["Europe", "North America", "South America"]);
    }

    #[test]
    fn test_peak_hour_view() {
        let board = dashboard();
        let view = board.peak_hour(&SelectionState::new());

        assert_eq!(view.by_country.value_of("18:00"), Some(125));
        assert_eq!(view.by_country.value_of("20:00"), Some(50));
    }

    #[test]
    fn test_device_view_scoped_by_continent() {
        let board = dashboard();
        let mut state = SelectionState::new();
        board.select(
            &mut state,
            TabId::Device,
            Dimension::Continent,
            Some("South America".to_string()),
        );

        let view = board.device(&state);
        assert_eq!(view.by_continent.value_of("Desktop"), Some(50));
        assert_eq!(view.by_continent.value_of("Mobile"), None);
        // Country scope is unrestricted and sees the whole batch
        assert_eq!(view.by_country.total(), 175);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let board = dashboard();
        let mut state = SelectionState::new();
        board.select(
            &mut state,
            TabId::Referrer,
            Dimension::Country,
            Some("USA".to_string()),
        );

        let first = board.referrer(&state);
        let second = board.referrer(&state);
        assert_eq!(first.by_country, second.by_country);
        assert_eq!(first.by_continent, second.by_continent);
    }

    #[test]
    fn test_sessions_have_independent_state() {
        let board = dashboard();
        let mut first = SelectionState::new();
        let second = SelectionState::new();

        board.select(
            &mut first,
            TabId::Device,
            Dimension::Country,
            Some("USA".to_string()),
        );

        assert_ne!(first.session_id(), second.session_id());
        assert!(second.filters(TabId::Device).is_unrestricted());
    }

    #[test]
    fn test_summary_over_unfiltered_batch() {
        let board = dashboard();
        let mut state = SelectionState::new();
        board.select(
            &mut state,
            TabId::Location,
            Dimension::Country,
            Some("France".to_string()),
        );

        // Summary ignores selections entirely
        let summary = board.summary();
        assert_eq!(summary.total, 175);
        assert_eq!(summary.top_continent.unwrap().label, "North America");
        assert_eq!(summary.top_sport.unwrap().label, "Swimming");
    }
}
