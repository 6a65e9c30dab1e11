//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// relfinder - Look up pairwise relatedness estimates for a list of individuals.
#[derive(Debug, Parser)]
#[command(name = "relfinder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, global = true, env = "RELFINDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the estimated relatedness of every pair in an identifier list
    DetermineRelatedness(DetermineArgs),

    /// Plot relatedness distributions among cases and among controls
    GatherDistributions(GatherArgs),
}

/// Logging flags shared by every command.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Logging level: 'warning', 'verbose' or 'debug'
    #[arg(short = 'l', long = "loglevel", value_enum, default_value = "warning")]
    pub loglevel: LogLevel,

    /// Also log to the console, not only to the log file
    #[arg(long)]
    pub log_to_console: bool,

    /// Name for the log output file
    #[arg(long, default_value = "relfinder.log")]
    pub log_filename: String,
}

/// Arguments for the determine-relatedness command.
#[derive(Debug, Parser)]
pub struct DetermineArgs {
    /// Tab-separated file of IDs, one per line (optionally with a phenotype column)
    #[arg(short = 'g', long)]
    pub grid_file: PathBuf,

    /// Path to the database that has the relatedness values for each pair
    #[arg(short = 'd', long)]
    pub database_path: PathBuf,

    /// Name of the table within the database
    #[arg(short = 't', long)]
    pub table_name: String,

    /// File to write the report to
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Minimum estimated relatedness (0-9) for a pair to be reported
    #[arg(long = "rel-threshold", default_value_t = 0)]
    pub rel_threshold: i64,

    /// Report every stored pair touching a listed ID, not only pairs among listed IDs
    #[arg(long)]
    pub all_connections: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the gather-distributions command.
#[derive(Debug, Parser)]
pub struct GatherArgs {
    /// Tab-separated file of IDs and phenotype (1 = case, 0 = control)
    pub case_control_file: PathBuf,

    /// Output prefix; plots are written to <prefix>_cases and <prefix>_controls
    pub output_prefix: PathBuf,

    /// Path to the database that has the relatedness values for each pair
    pub database_path: PathBuf,

    /// Name of the table within the database
    pub table_name: String,

    /// Image format of the plots, overriding the settings file (SVG by default; PNG plots carry no text)
    #[arg(long, value_enum)]
    pub plot_format: Option<PlotFormatArg>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Log level argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Warnings and errors only
    Warning,
    /// Progress information
    Verbose,
    /// Everything, including the SQL sent to the database
    Debug,
}

/// Plot format argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PlotFormatArg {
    /// PNG image
    Png,
    /// SVG image
    Svg,
}

impl From<PlotFormatArg> for relfinder_analysis::PlotFormat {
    fn from(format: PlotFormatArg) -> Self {
        match format {
            PlotFormatArg::Png => relfinder_analysis::PlotFormat::Png,
            PlotFormatArg::Svg => relfinder_analysis::PlotFormat::Svg,
        }
    }
}

impl DetermineArgs {
    /// User inputs, for the log
    pub fn inputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("grid_file_path", self.grid_file.display().to_string()),
            ("database_path", self.database_path.display().to_string()),
            ("database_table", self.table_name.clone()),
            ("output_path", self.output.display().to_string()),
            ("relatedness_threshold", self.rel_threshold.to_string()),
            ("all_connections", self.all_connections.to_string()),
            ("loglevel", format!("{:?}", self.log.loglevel)),
            ("log_filename", self.log.log_filename.clone()),
        ]
    }
}

impl GatherArgs {
    /// User inputs, for the log
    pub fn inputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("case_control_file", self.case_control_file.display().to_string()),
            ("output_prefix", self.output_prefix.display().to_string()),
            ("database_path", self.database_path.display().to_string()),
            ("database_table", self.table_name.clone()),
            ("loglevel", format!("{:?}", self.log.loglevel)),
            ("log_filename", self.log.log_filename.clone()),
        ]
    }
}
