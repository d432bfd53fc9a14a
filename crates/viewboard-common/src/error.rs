//! Error types and utilities for Viewboard

use thiserror::Error;

/// Result type alias for Viewboard operations
pub type Result<T> = std::result::Result<T, ViewboardError>;

/// Main error type for Viewboard operations
#[derive(Error, Debug)]
pub enum ViewboardError {
    /// The dataset provider could not be reached or returned malformed
    /// content at startup; fatal to initialization
    #[error("Dataset unavailable: {message}")]
    DataUnavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network related errors (HTTP requests, etc.)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Chart generation and plotting errors
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ViewboardError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data-unavailable error
    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new data-unavailable error with source
    pub fn data_unavailable_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataUnavailable {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

// Error conversion implementations for external types

/// Convert from reqwest::Error to ViewboardError
///
/// Any failure talking to the dataset provider is fatal to startup, so all
/// variants map into the DataUnavailable taxonomy.
impl From<reqwest::Error> for ViewboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::data_unavailable_with_source("Provider request timeout", err)
        } else if err.is_connect() {
            Self::data_unavailable_with_source("Provider connection failed", err)
        } else if err.is_status() {
            let status_code = err.status().map(|s| s.as_u16()).unwrap_or(0);
            Self::data_unavailable_with_source(format!("Provider HTTP error: {}", status_code), err)
        } else {
            Self::data_unavailable_with_source("Provider request failed", err)
        }
    }
}

/// Convert from toml::de::Error to ViewboardError
impl From<toml::de::Error> for ViewboardError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

/// Convert from config::ConfigError to ViewboardError
impl From<config::ConfigError> for ViewboardError {
    fn from(err: config::ConfigError) -> Self {
        Self::config_with_source("Configuration loading error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to ViewboardError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for ViewboardError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Chart rendering failed", err)
    }
}
