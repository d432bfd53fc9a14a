//! Chart configuration types

use serde::{Deserialize, Serialize};

/// Supported chart encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Pie,
}

/// Configuration for a single chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Background color (hex format, e.g. "#FFFFFF")
    pub background_color: String,
    /// Primary color for chart elements (hex format)
    pub primary_color: String,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Chart".to_string(),
            width: 800,
            height: 600,
            x_label: None,
            y_label: None,
            background_color: "#FFFFFF".to_string(),
            primary_color: "#3498db".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 16,
        }
    }
}

impl ChartConfig {
    /// Configuration with a title and axis labels
    pub fn titled(title: &str, x_label: Option<&str>, y_label: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.map(|s| s.to_string()),
            y_label: y_label.map(|s| s.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.background_color, "#FFFFFF");
    }

    #[test]
    fn test_titled() {
        let config = ChartConfig::titled("Viewership", Some("Continent"), Some("Viewership"));
        assert_eq!(config.title, "Viewership");
        assert_eq!(config.x_label.as_deref(), Some("Continent"));
        assert_eq!(config.y_label.as_deref(), Some("Viewership"));
    }
}
