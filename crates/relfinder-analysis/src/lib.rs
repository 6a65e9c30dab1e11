//! relfinder Analysis
//!
//! Output side of a run: the thresholded pair report and the per-group
//! relatedness histograms.

#![warn(missing_docs)]

mod error;
pub mod distribution;
pub mod plot;
pub mod report;

pub use distribution::{flatten_scores, Histogram, HistogramBin};
pub use error::AnalysisError;
pub use plot::{plot_distribution, PlotFormat, PlotSettings};
pub use report::{write_pair_map, write_rows, REPORT_HEADER};
