//! Configuration management for Viewboard

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::ConfigLoader;
pub use settings::{Config, LoggingSettings, ProviderSettings, RenderSettings};
