//! Common types, errors and the dataset provider client for Viewboard

pub mod error;
pub mod logging;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ViewboardError};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
pub use provider::{DatasetClient, ProviderConfig};
pub use types::{
    Dimension, SessionId, Timestamp, ViewRecord, AGE_BRACKETS, ALL_CONTINENTS, ALL_COUNTRIES,
    GENDERS,
};
