//! Rendering trait and color utilities

use crate::types::ChartConfig;
use async_trait::async_trait;
use plotters::style::RGBColor;
use std::path::Path;
use viewboard_common::Result;
use viewboard_engine::AggregateSeries;

/// Renders one aggregate series into a chart image
#[async_trait]
pub trait ChartRenderer {
    /// Render the series to an image file at `path`
    async fn render_to_file(
        &self,
        config: &ChartConfig,
        series: &AggregateSeries,
        path: &Path,
    ) -> Result<()>;
}

/// Parse a "#RRGGBB" hex color, falling back to white on malformed input
pub(crate) fn parse_color(hex: &str) -> RGBColor {
    let digits = hex.trim_start_matches('#');
    // Byte ranges below require ASCII; non-ASCII input is malformed anyway
    if digits.len() != 6 || !digits.is_ascii() {
        return RGBColor(255, 255, 255);
    }
    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).unwrap_or(255);
    RGBColor(parse(0..2), parse(2..4), parse(4..6))
}

/// A categorical palette cycled across pie slices
pub(crate) const PALETTE: [RGBColor; 8] = [
    RGBColor(0x34, 0x98, 0xdb),
    RGBColor(0xe7, 0x4c, 0x3c),
    RGBColor(0x2e, 0xcc, 0x71),
    RGBColor(0xf3, 0x9c, 0x12),
    RGBColor(0x9b, 0x59, 0xb6),
    RGBColor(0x1a, 0xbc, 0x9c),
    RGBColor(0x34, 0x49, 0x5e),
    RGBColor(0x95, 0xa5, 0xa6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#3498db"), RGBColor(0x34, 0x98, 0xdb));
        assert_eq!(parse_color("FFFFFF"), RGBColor(255, 255, 255));
        assert_eq!(parse_color("#bad"), RGBColor(255, 255, 255));
    }

    #[test]
    fn test_parse_color_non_ascii_falls_back() {
        // Six bytes but not six ASCII digits; must not panic mid-character
        assert_eq!(parse_color("#aéé9"), RGBColor(255, 255, 255));
        assert_eq!(parse_color("#ааzz"), RGBColor(255, 255, 255));
    }
}
