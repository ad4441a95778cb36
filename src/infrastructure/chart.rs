//! Daily entry-count chart rendering
//!
//! The charting collaborator: takes `(date, count)` pairs and writes a bar
//! chart to an SVG file. SVG keeps the renderer free of system font and
//! raster dependencies.

use crate::error::{LogbookError, Result};
use chrono::{Datelike, Local, NaiveDate};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const CHART_SIZE: (u32, u32) = (1000, 600);
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235); // sky blue

/// Renders the per-day entry-count bar chart to a fixed path
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    path: PathBuf,
}

impl ChartRenderer {
    pub fn new(path: PathBuf) -> Self {
        ChartRenderer { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Draw one bar per calendar date, overwriting any previous chart.
    ///
    /// X tick labels are `DD-MM`, the x-axis is labelled with the current
    /// year, and the y-axis carries integer-only tick counts.
    pub fn render(&self, counts: &[(NaiveDate, usize)]) -> Result<()> {
        let labels: Vec<String> = counts
            .iter()
            .map(|(date, _)| date.format("%d-%m").to_string())
            .collect();
        let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(0) as u32;
        let x_max = counts.len().max(1) as u32;

        let root = SVGBackend::new(&self.path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Number of Log Entries per Day", ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(50)
            .build_cartesian_2d((0u32..x_max).into_segmented(), 0u32..max_count + 1)
            .map_err(to_chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(Local::now().year().to_string())
            .y_desc("Number of Entries")
            .x_labels(x_max as usize)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                    labels.get(*i as usize).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .y_label_formatter(&|count| count.to_string())
            .draw()
            .map_err(to_chart_error)?;

        chart
            .draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
                Rectangle::new(
                    [
                        (SegmentValue::Exact(i as u32), 0),
                        (SegmentValue::Exact(i as u32 + 1), *count as u32),
                    ],
                    BAR_COLOR.filled(),
                )
            }))
            .map_err(to_chart_error)?;

        root.present().map_err(to_chart_error)?;
        Ok(())
    }
}

fn to_chart_error<E: std::fmt::Display>(e: E) -> LogbookError {
    LogbookError::Chart(e.to_string())
}
