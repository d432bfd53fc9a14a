//! Categorical bar chart renderer

use crate::traits::{parse_color, ChartRenderer};
use crate::types::ChartConfig;
use async_trait::async_trait;
use plotters::prelude::*;
use std::path::Path;
use viewboard_common::Result;
use viewboard_engine::AggregateSeries;

/// Bar chart over a categorical axis, one bar per series point
#[derive(Debug, Default)]
pub struct BarChart;

impl BarChart {
    pub fn new() -> Self {
        Self
    }

    /// Y-axis upper bound with headroom; a default for all-zero series
    fn max_y(series: &AggregateSeries) -> f64 {
        let max = series.max_value();
        if max == 0 {
            10.0
        } else {
            max as f64 * 1.1
        }
    }
}

#[async_trait]
impl ChartRenderer for BarChart {
    async fn render_to_file(
        &self,
        config: &ChartConfig,
        series: &AggregateSeries,
        path: &Path,
    ) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&parse_color(&config.background_color))?;

        let n = series.points.len().max(1) as i32;
        let max_y = Self::max_y(series);
        let labels: Vec<String> = series.labels().map(str::to_string).collect();

        let title_font = (config.font_family.as_str(), config.font_size as f64);
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(0i32..n, 0.0..max_y)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or(""))
            .y_desc(config.y_label.as_deref().unwrap_or("Viewership"))
            .x_labels(labels.len().max(1))
            .x_label_formatter(&|x| {
                labels
                    .get(*x as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .draw()?;

        let bar_color = parse_color(&config.primary_color);
        chart.draw_series(series.points.iter().enumerate().map(|(i, point)| {
            Rectangle::new(
                [(i as i32, 0.0), (i as i32 + 1, point.value as f64)],
                bar_color.filled(),
            )
        }))?;

        root.present()?;
        tracing::info!("Rendered bar chart to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use viewboard_engine::{SeriesPoint};
    use viewboard_common::Dimension;

    fn series() -> AggregateSeries {
        AggregateSeries {
            dimension: Dimension::Continent,
            points: vec![
                SeriesPoint {
                    label: "North America".to_string(),
                    value: 100,
                },
                SeriesPoint {
                    label: "South America".to_string(),
                    value: 50,
                },
            ],
        }
    }

    #[test]
    fn test_max_y_headroom() {
        let s = series();
        assert!((BarChart::max_y(&s) - 110.0).abs() < f64::EPSILON);

        let zero = AggregateSeries {
            dimension: Dimension::Continent,
            points: vec![SeriesPoint {
                label: "Europe".to_string(),
                value: 0,
            }],
        };
        assert_eq!(BarChart::max_y(&zero), 10.0);
    }

    #[tokio::test]
    async fn test_render_to_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("continent_bar.png");
        let config = ChartConfig::titled("Viewership by Continent", Some("Continent"), None);

        let result = BarChart::new().render_to_file(&config, &series(), &path).await;
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_render_empty_series() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty_bar.png");
        let empty = AggregateSeries {
            dimension: Dimension::Continent,
            points: Vec::new(),
        };

        let result = BarChart::new()
            .render_to_file(&ChartConfig::default(), &empty, &path)
            .await;
        assert!(result.is_ok());
        assert!(path.exists());
    }
}
