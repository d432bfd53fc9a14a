//! Layered configuration loading
//!
//! Defaults, then an optional TOML file, then environment variables with the
//! `VIEWBOARD` prefix (e.g. `VIEWBOARD_PROVIDER__URL`). The merged result
//! is validated before use.

use crate::settings::Config;
use config::{Environment, File, FileFormat};
use tracing::{debug, info};
use validator::Validate;
use viewboard_common::{Result, ViewboardError};

/// Loads and validates the application configuration
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the default locations (`viewboard.toml` if present, then
    /// environment overrides)
    pub fn load() -> Result<Config> {
        Self::load_from(None)
    }

    /// Load with an explicit configuration file path
    pub fn load_from(path: Option<&str>) -> Result<Config> {
        let defaults = config::Config::try_from(&Config::default())
            .map_err(ViewboardError::from)?;

        let mut builder = config::Config::builder().add_source(defaults);

        builder = match path {
            Some(path) => {
                debug!("Loading configuration file: {}", path);
                builder.add_source(File::new(path, FileFormat::Toml).required(true))
            }
            None => builder.add_source(File::new("viewboard", FileFormat::Toml).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("VIEWBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let config: Config = builder
            .build()?
            .try_deserialize()
            .map_err(ViewboardError::from)?;

        config
            .validate()
            .map_err(|e| ViewboardError::validation(e.to_string()))?;

        info!("Configuration loaded");
        Ok(config)
    }
}
