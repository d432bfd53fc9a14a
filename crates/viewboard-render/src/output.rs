//! Dashboard output rendering
//!
//! Maps each computed view to its widget id and writes one artifact per
//! widget: PNG charts for series, JSON for the summary scalars.

use crate::bar::BarChart;
use crate::pie::PieChart;
use crate::traits::ChartRenderer;
use crate::types::ChartConfig;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use viewboard_common::Result;
use viewboard_engine::{widget, AggregateSeries, Dashboard, SelectionState};

/// Renders every dashboard widget for one selection state into a directory
#[derive(Debug)]
pub struct DashboardRenderer {
    output_dir: PathBuf,
    base_config: ChartConfig,
}

impl DashboardRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, base_config: ChartConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            base_config,
        }
    }

    fn widget_path(&self, widget_id: &str) -> PathBuf {
        self.output_dir.join(format!("{widget_id}.png"))
    }

    fn config(&self, title: &str, x_label: Option<&str>) -> ChartConfig {
        ChartConfig {
            title: title.to_string(),
            x_label: x_label.map(|s| s.to_string()),
            y_label: Some("Viewership".to_string()),
            ..self.base_config.clone()
        }
    }

    async fn bar(&self, widget_id: &str, title: &str, x_label: &str, series: &AggregateSeries) -> Result<PathBuf> {
        let path = self.widget_path(widget_id);
        BarChart::new()
            .render_to_file(&self.config(title, Some(x_label)), series, &path)
            .await?;
        Ok(path)
    }

    async fn pie(&self, widget_id: &str, title: &str, series: &AggregateSeries) -> Result<PathBuf> {
        let path = self.widget_path(widget_id);
        PieChart::new()
            .render_to_file(&self.config(title, None), series, &path)
            .await?;
        Ok(path)
    }

    /// Render every tab's widgets plus the summary panel
    #[instrument(skip(self, board, state))]
    pub async fn render_all(
        &self,
        board: &Dashboard,
        state: &SelectionState,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir)?;
        let mut outputs = Vec::new();

        let location = board.location(state);
        outputs.push(
            self.bar(
                widget::LOCATION_COUNTRY_MAP,
                "Viewership Distribution by Country",
                "Country",
                &location.country_map,
            )
            .await?,
        );
        outputs.push(
            self.bar(
                widget::LOCATION_CONTINENT_BAR,
                "Viewership by Continent",
                "Continent",
                &location.continent_bar,
            )
            .await?,
        );

        let demographic = board.demographic(state);
        let axis_name = demographic.choice.dimension().name();
        outputs.push(
            self.bar(
                widget::DEMOGRAPHIC_COUNTRY,
                "Viewership Distribution by Demographic (Country)",
                axis_name,
                &demographic.country_breakdown,
            )
            .await?,
        );
        outputs.push(
            self.pie(
                widget::DEMOGRAPHIC_CONTINENT,
                "Viewership Distribution by Demographic (Continent)",
                &demographic.continent_breakdown,
            )
            .await?,
        );

        let peak = board.peak_hour(state);
        outputs.push(
            self.bar(
                widget::PEAK_HOUR_COUNTRY,
                "Viewership Distribution over Peak Usage Hours (Country)",
                "Peak Usage Hours",
                &peak.by_country,
            )
            .await?,
        );
        outputs.push(
            self.bar(
                widget::PEAK_HOUR_CONTINENT,
                "Viewership Distribution over Peak Usage Hours (Continent)",
                "Peak Usage Hours",
                &peak.by_continent,
            )
            .await?,
        );

        let referrer = board.referrer(state);
        outputs.push(
            self.bar(
                widget::REFERRER_COUNTRY,
                "Viewership by Referrer (Country)",
                "Referrer",
                &referrer.by_country,
            )
            .await?,
        );
        outputs.push(
            self.pie(
                widget::REFERRER_CONTINENT,
                "Viewership Distribution by Referrer (Continent)",
                &referrer.by_continent,
            )
            .await?,
        );

        let device = board.device(state);
        outputs.push(
            self.bar(
                widget::DEVICE_COUNTRY,
                "Viewership Distribution by Device Type (Country)",
                "Device Type",
                &device.by_country,
            )
            .await?,
        );
        outputs.push(
            self.pie(
                widget::DEVICE_CONTINENT,
                "Proportion of Viewership by Device Type (Continent)",
                &device.by_continent,
            )
            .await?,
        );

        outputs.push(self.render_summary(board)?);

        info!(widgets = outputs.len(), "Dashboard rendered");
        Ok(outputs)
    }

    /// Write the six summary scalars as one JSON artifact
    pub fn render_summary(&self, board: &Dashboard) -> Result<PathBuf> {
        let summary = board.summary();
        let path = self.output_dir.join("summary.json");
        let file = std::fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, &summary)?;
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
