//! Histogram images of relatedness values

use crate::distribution::Histogram;
use crate::AnalysisError;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Image format of distribution plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotFormat {
    /// Raster image; drawn without text
    Png,

    /// Vector image with title, axis labels and tick values
    #[default]
    Svg,
}

impl PlotFormat {
    /// File extension
    pub fn extension(&self) -> &'static str {
        match self {
            PlotFormat::Png => "png",
            PlotFormat::Svg => "svg",
        }
    }
}

/// Plot size, binning and format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSettings {
    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Number of histogram bins
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Output format
    #[serde(default)]
    pub format: PlotFormat,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            bins: default_bins(),
            format: PlotFormat::default(),
        }
    }
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_bins() -> usize {
    10
}

/// Path `<prefix>_<suffix>.<ext>`, next to the prefix
///
/// Parent folders are created as needed.
pub fn output_path(prefix: &Path, suffix: &str, format: PlotFormat) -> Result<PathBuf, AnalysisError> {
    let name = prefix
        .file_name()
        .ok_or_else(|| AnalysisError::InvalidPrefix(prefix.to_path_buf()))?;

    let mut file_name = name.to_os_string();
    file_name.push(format!("_{}.{}", suffix, format.extension()));

    let path = match prefix.parent() {
        Some(parent) if parent != Path::new("") => {
            std::fs::create_dir_all(parent)?;
            parent.join(file_name)
        }
        _ => PathBuf::from(file_name),
    };
    Ok(path)
}

/// Render a histogram of `scores` to `<prefix>_<suffix>.<ext>`
///
/// Returns the path written.
pub fn plot_distribution(
    scores: &[i64],
    prefix: &Path,
    suffix: &str,
    settings: &PlotSettings,
) -> Result<PathBuf, AnalysisError> {
    tracing::debug!("creating a plot of the relatedness distributions");

    let hist = Histogram::from_values(scores, settings.bins);
    let path = output_path(prefix, suffix, settings.format)?;
    let size = (settings.width, settings.height);

    match settings.format {
        PlotFormat::Png => {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            draw_histogram(&root, &hist, false)?;
        }
        PlotFormat::Svg => {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            draw_histogram(&root, &hist, true)?;
        }
    }

    tracing::info!(
        "Plotted {} relatedness values to {}",
        hist.total(),
        path.display()
    );
    Ok(path)
}

fn plot_err(e: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::Plot(e.to_string())
}

/// Draw bars, plus caption and axes when `labelled`
fn draw_histogram<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    hist: &Histogram,
    labelled: bool,
) -> Result<(), AnalysisError> {
    root.fill(&WHITE).map_err(plot_err)?;

    let (lo, hi) = hist.range();
    let top = (hist.max_count().max(1) as f64) * 1.05;

    let mut builder = ChartBuilder::on(root);
    builder.margin(20);
    if labelled {
        builder
            .caption("Distribution of relatedness values", ("sans-serif", 24))
            .x_label_area_size(40)
            .y_label_area_size(50);
    }
    let mut chart = builder
        .build_cartesian_2d(lo..hi, 0f64..top)
        .map_err(plot_err)?;

    if labelled {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Estimated relatedness")
            .y_desc("Counts")
            .axis_desc_style(("sans-serif", 16))
            .draw()
            .map_err(plot_err)?;
    } else {
        chart
            .draw_series(LineSeries::new([(lo, 0.0), (hi, 0.0)], &BLACK))
            .map_err(plot_err)?;
    }

    chart
        .draw_series(hist.bins().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(plot_err)?;

    // present explicitly so write failures surface here
    root.present().map_err(plot_err)?;
    Ok(())
}
