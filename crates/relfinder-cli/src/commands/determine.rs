//! Determine-relatedness command implementation.

use crate::cli::DetermineArgs;
use crate::context::RunContext;
use crate::error::{CliError, Result};
use crate::input::read_identifiers;
use relfinder_analysis::{write_pair_map, write_rows};
use relfinder_domain::{AbsorbStats, Identifier, PairMap, PairScope, RelatednessSource};
use relfinder_store::SqliteStore;
use std::path::Path;

/// Execute the determine-relatedness command.
///
/// Returns the number of pairs written to the report.
pub fn execute_determine(args: &DetermineArgs, context: &RunContext) -> Result<usize> {
    let ids = read_identifiers(&args.grid_file)?;
    let mut store = SqliteStore::open(&args.database_path, args.table_name.as_str())?;

    report_relatedness(
        &mut store,
        &ids,
        PairScope::from_all_connections(args.all_connections),
        context.settings.page_size,
        &args.output,
        args.rel_threshold,
    )
}

/// Look up `ids` in `source` and write the thresholded report to `output`.
///
/// Pairs among the listed identifiers go through a [`PairMap`], so pairs
/// missing from the store are reported with a score of 0. With
/// [`PairScope::Touching`] the rows are written as returned.
pub fn report_relatedness<S>(
    source: &mut S,
    ids: &[Identifier],
    scope: PairScope,
    page_size: usize,
    output: &Path,
    threshold: i64,
) -> Result<usize>
where
    S: RelatednessSource,
    CliError: From<S::Error>,
{
    let written = match scope {
        PairScope::Within => {
            let mut pairs = PairMap::new(ids.iter().cloned());
            tracing::debug!("Built a map of {} pairs", pairs.len());

            let mut stats = AbsorbStats::default();
            let total = source.read_pages(ids, scope, page_size, &mut |page| {
                stats.merge(pairs.absorb(&page));
            })?;

            tracing::info!("Found {} rows for {} identifiers", total, ids.len());
            if stats.unmatched > 0 {
                tracing::debug!("{} rows matched no pair and were skipped", stats.unmatched);
            }
            write_pair_map(&pairs, output, threshold)?
        }
        PairScope::Touching => {
            let mut rows = Vec::new();
            let total = source.read_pages(ids, scope, page_size, &mut |page| rows.extend(page))?;

            tracing::info!("Found {} rows touching {} identifiers", total, ids.len());
            write_rows(&rows, output, threshold)?
        }
    };

    tracing::info!(
        "Wrote {} pairs at or above a relatedness of {} to {}",
        written,
        threshold,
        output.display()
    );
    Ok(written)
}
