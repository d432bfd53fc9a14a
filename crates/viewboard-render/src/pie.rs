//! Pie chart renderer

use crate::traits::{parse_color, ChartRenderer, PALETTE};
use crate::types::ChartConfig;
use async_trait::async_trait;
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;
use viewboard_common::Result;
use viewboard_engine::AggregateSeries;

/// Proportional pie chart, one slice per non-zero series point
#[derive(Debug, Default)]
pub struct PieChart;

impl PieChart {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChartRenderer for PieChart {
    async fn render_to_file(
        &self,
        config: &ChartConfig,
        series: &AggregateSeries,
        path: &Path,
    ) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&parse_color(&config.background_color))?;

        let title_font = (config.font_family.as_str(), config.font_size as f64);
        let root = root.titled(&config.title, title_font)?;

        // Zero-valued groups carry no slice; an all-zero series renders as
        // an empty (but valid) chart
        let slices: Vec<(&str, u64)> = series
            .points
            .iter()
            .filter(|point| point.value > 0)
            .map(|point| (point.label.as_str(), point.value))
            .collect();

        if !slices.is_empty() {
            let sizes: Vec<f64> = slices.iter().map(|(_, value)| *value as f64).collect();
            let labels: Vec<String> = slices.iter().map(|(label, _)| label.to_string()).collect();
            let colors: Vec<RGBColor> = (0..slices.len())
                .map(|i| PALETTE[i % PALETTE.len()])
                .collect();

            let center = (config.width as i32 / 2, config.height as i32 / 2);
            let radius = (config.width.min(config.height) as f64) * 0.35;

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.label_style(
                (config.font_family.as_str(), config.font_size as f64 / 2.0).into_font(),
            );
            root.draw(&pie)?;
        }

        root.present()?;
        tracing::info!("Rendered pie chart to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use viewboard_common::Dimension;
    use viewboard_engine::SeriesPoint;

    fn series(values: &[(&str, u64)]) -> AggregateSeries {
        AggregateSeries {
            dimension: Dimension::Referrer,
            points: values
                .iter()
                .map(|(label, value)| SeriesPoint {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_render_to_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("referrer_pie.png");
        let config = ChartConfig::titled("Viewership by Referrer", None, None);

        let result = PieChart::new()
            .render_to_file(&config, &series(&[("Social", 100), ("Direct", 50)]), &path)
            .await;
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_render_all_zero_series() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("zero_pie.png");

        let result = PieChart::new()
            .render_to_file(
                &ChartConfig::default(),
                &series(&[("Social", 0), ("Direct", 0)]),
                &path,
            )
            .await;
        assert!(result.is_ok());
        assert!(path.exists());
    }
}
