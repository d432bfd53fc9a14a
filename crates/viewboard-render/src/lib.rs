//! Chart rendering surface for Viewboard
//!
//! Receives computed aggregate series keyed by widget id and draws them with
//! plotters. The engine stays presentation-free; all visual encoding lives
//! here.

pub mod bar;
pub mod output;
pub mod pie;
pub mod traits;
pub mod types;

pub use bar::BarChart;
pub use output::DashboardRenderer;
pub use pie::PieChart;
pub use traits::ChartRenderer;
pub use types::{ChartConfig, ChartKind};
