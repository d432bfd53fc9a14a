//! Custom validation helpers

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Matches "#RRGGBB" hex colors
pub static HEX_COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Accepts the standard tracing level names
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_regex() {
        assert!(HEX_COLOR_REGEX.is_match("#FFFFFF"));
        assert!(HEX_COLOR_REGEX.is_match("#3498db"));
        assert!(!HEX_COLOR_REGEX.is_match("FFFFFF"));
        assert!(!HEX_COLOR_REGEX.is_match("#FFF"));
        assert!(!HEX_COLOR_REGEX.is_match("#GGGGGG"));
    }

    #[test]
    fn test_log_level_validation() {
        assert!(validate_log_level("info").is_ok());
        assert!(validate_log_level("DEBUG").is_ok());
        assert!(validate_log_level("verbose").is_err());
    }
}
