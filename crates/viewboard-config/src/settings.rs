//! Application configuration structures

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Dataset provider configuration
    #[validate]
    pub provider: ProviderSettings,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,

    /// Chart rendering settings
    #[validate]
    pub render: RenderSettings,
}

/// Dataset provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderSettings {
    /// Dataset endpoint base URL
    #[validate(url(message = "Provider URL must be a valid URL"))]
    pub url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,

    /// Maximum number of retries for failed requests
    #[validate(range(max = 10, message = "Max retries cannot exceed 10"))]
    pub max_retries: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingSettings {
    /// Log level filter ("trace", "debug", "info", "warn", "error")
    #[validate(custom(function = "crate::validation::validate_log_level", message = "Invalid log level"))]
    pub level: String,

    /// Use compact single-line formatting
    pub compact_format: bool,

    /// Optional log file path
    pub file_path: Option<String>,
}

/// Chart rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenderSettings {
    /// Chart width in pixels
    #[validate(range(min = 100, max = 4000, message = "Width must be between 100 and 4000 pixels"))]
    pub width: u32,

    /// Chart height in pixels
    #[validate(range(min = 100, max = 4000, message = "Height must be between 100 and 4000 pixels"))]
    pub height: u32,

    /// Background color (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Background color must be a valid hex color"))]
    pub background_color: String,

    /// Primary color for chart elements (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Primary color must be a valid hex color"))]
    pub primary_color: String,

    /// Font family for text rendering
    pub font_family: String,

    /// Font size for titles and labels
    #[validate(range(min = 8, max = 72, message = "Font size must be between 8 and 72"))]
    pub font_size: u32,

    /// Directory chart artifacts are written to
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderSettings::default(),
            logging: LoggingSettings::default(),
            render: RenderSettings::default(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            url: "https://flask-dataset.onrender.com".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact_format: false,
            file_path: None,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            background_color: "#FFFFFF".to_string(),
            primary_color: "#3498db".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 16,
            output_dir: "charts".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_provider_url() {
        let config = Config {
            provider: ProviderSettings {
                url: "not a url".to_string(),
                ..ProviderSettings::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_hex_color() {
        let config = Config {
            render: RenderSettings {
                background_color: "white".to_string(),
                ..RenderSettings::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let config = Config {
            logging: LoggingSettings {
                level: "loud".to_string(),
                ..LoggingSettings::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
