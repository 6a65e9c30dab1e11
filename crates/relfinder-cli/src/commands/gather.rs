//! Gather-distributions command implementation.

use crate::cli::GatherArgs;
use crate::context::RunContext;
use crate::error::{CliError, Result};
use crate::input::read_cohort;
use relfinder_analysis::{flatten_scores, plot_distribution, PlotSettings};
use relfinder_domain::Phenotype;
use relfinder_store::fetch_cohort;
use std::path::PathBuf;

/// Execute the gather-distributions command.
///
/// Returns the paths of the plots written, cases first. A group with no
/// identifiers gets no plot.
pub async fn execute_gather(args: &GatherArgs, context: &RunContext) -> Result<Vec<PathBuf>> {
    let cohort = read_cohort(&args.case_control_file)?;
    if cohort.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no case or control IDs in {}",
            args.case_control_file.display()
        )));
    }

    let rows = fetch_cohort(
        &args.database_path,
        &args.table_name,
        &cohort,
        context.settings.page_size,
    )
    .await?;

    let settings = plot_settings(args, &context.settings.plot);
    let mut written = Vec::with_capacity(2);
    for phenotype in [Phenotype::Case, Phenotype::Control] {
        if cohort.group(phenotype).is_empty() {
            tracing::warn!("No {} in the input file, skipping their plot", phenotype.suffix());
            continue;
        }
        let scores = flatten_scores(rows.group(phenotype));
        tracing::debug!(
            "Gathered {} relatedness values for the {}",
            scores.len(),
            phenotype.suffix()
        );
        let path = plot_distribution(&scores, &args.output_prefix, phenotype.suffix(), &settings)?;
        written.push(path);
    }

    tracing::info!(
        "Relatedness distributions written to {}",
        written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(written)
}

/// Plot settings with the command-line format applied over the file's.
fn plot_settings(args: &GatherArgs, base: &PlotSettings) -> PlotSettings {
    let mut settings = base.clone();
    if let Some(format) = args.plot_format {
        settings.format = format.into();
    }
    settings
}
