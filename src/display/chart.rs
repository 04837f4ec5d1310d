//! Breakdown chart rendering
//!
//! The chart renderer is a collaborator boundary: aggregation code never
//! touches it, and anything that can draw label/value pairs satisfies the
//! trait. The shipped renderer draws a percentage-labelled proportional
//! bar chart, persists it to a text artifact, and prints it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::display::format::{format_bar, format_percentage, separator, truncate};
use crate::error::{TallyError, TallyResult};

/// One labelled share of the chart
#[derive(Debug, Clone)]
pub struct ChartSlice {
    pub label: String,
    /// Value in currency units
    pub value: f64,
    /// Share of the whole, in percent
    pub percentage: f64,
}

/// Label/value pairs ready for rendering
#[derive(Debug, Clone)]
pub struct BreakdownChart {
    pub title: String,
    pub slices: Vec<ChartSlice>,
}

/// A collaborator that can draw a breakdown chart
pub trait ChartRenderer {
    fn render(&self, chart: &BreakdownChart) -> TallyResult<()>;
}

/// Renders the breakdown as proportional text bars, writes the chart to a
/// file, and displays it on the terminal.
#[derive(Debug, Clone)]
pub struct TextChartRenderer {
    output_path: PathBuf,
    bar_width: usize,
}

impl TextChartRenderer {
    /// Create a renderer that persists the chart at the given path
    pub fn new(output_path: impl Into<PathBuf>, bar_width: usize) -> Self {
        Self {
            output_path: output_path.into(),
            bar_width,
        }
    }

    /// Where the chart artifact is written
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Draw the chart into a string
    pub fn render_to_string(&self, chart: &BreakdownChart) -> String {
        let label_width = 18;
        let max_value = chart
            .slices
            .iter()
            .map(|s| s.value)
            .fold(0.0_f64, f64::max);

        let mut output = String::new();
        output.push_str(&chart.title);
        output.push('\n');
        output.push_str(&separator(label_width + self.bar_width + 18));
        output.push('\n');

        for slice in &chart.slices {
            output.push_str(&format!(
                "{:<label_width$} {} {:>7} ({:.2})\n",
                truncate(&slice.label, label_width),
                format_bar(slice.value, max_value, self.bar_width),
                format_percentage(slice.percentage),
                slice.value,
                label_width = label_width
            ));
        }

        output
    }
}

impl ChartRenderer for TextChartRenderer {
    fn render(&self, chart: &BreakdownChart) -> TallyResult<()> {
        let rendered = self.render_to_string(chart);

        fs::write(&self.output_path, &rendered).map_err(|e| {
            TallyError::Render(format!(
                "cannot write chart to '{}': {}",
                self.output_path.display(),
                e
            ))
        })?;

        print!("{}", rendered);
        println!();
        println!("Chart saved as '{}'", self.output_path.display());
        Ok(())
    }
}
