//! Viewership filtering, aggregation and summary engine
//!
//! The batch is fetched once, indexed once, and every user interaction is a
//! synchronous recomputation pass: filter, aggregate, hand the series to the
//! rendering surface.

pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod index;
pub mod store;
pub mod summary;

// Re-export commonly used types
pub use aggregate::{aggregate, AggregateSeries, Axis, Reducer, SeriesPoint};
pub use dashboard::{
    widget, Dashboard, DemographicChoice, DemographicView, LocationView, PeakHourView,
    ScopedBreakdown, SelectionState, TabId,
};
pub use filter::{FilterSet, SelectionResolver};
pub use index::DimensionIndex;
pub use store::RecordStore;
pub use summary::{compute_summary, DimensionLeader, SummaryStats};
