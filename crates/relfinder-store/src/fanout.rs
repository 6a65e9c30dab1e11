//! Concurrent case/control lookups
//!
//! Each group gets its own blocking task and its own read-only connection.
//! The two tasks share nothing; both must finish before results are used.

use crate::{SqliteStore, StoreError};
use relfinder_domain::{Cohort, Identifier, PairScope, Phenotype, RelatednessRow};
use std::path::{Path, PathBuf};

/// Rows returned for each group of a cohort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CohortRows {
    /// Rows among case identifiers
    pub cases: Vec<RelatednessRow>,

    /// Rows among control identifiers
    pub controls: Vec<RelatednessRow>,
}

impl CohortRows {
    /// Rows of one group
    pub fn group(&self, phenotype: Phenotype) -> &[RelatednessRow] {
        match phenotype {
            Phenotype::Case => &self.cases,
            Phenotype::Control => &self.controls,
        }
    }
}

/// Look up relatedness within the cases and within the controls concurrently
///
/// An empty group is not queried and comes back with no rows. If either
/// lookup fails the whole call fails; the other group's rows are discarded.
pub async fn fetch_cohort(
    db_path: &Path,
    table: &str,
    cohort: &Cohort,
    page_size: usize,
) -> Result<CohortRows, StoreError> {
    let cases = spawn_group(db_path, table, cohort.cases.clone(), page_size, Phenotype::Case);
    let controls = spawn_group(
        db_path,
        table,
        cohort.controls.clone(),
        page_size,
        Phenotype::Control,
    );

    let (cases, controls) = tokio::try_join!(cases, controls)?;
    Ok(CohortRows { cases, controls })
}

async fn spawn_group(
    db_path: &Path,
    table: &str,
    ids: Vec<Identifier>,
    page_size: usize,
    phenotype: Phenotype,
) -> Result<Vec<RelatednessRow>, StoreError> {
    if ids.is_empty() {
        tracing::warn!("No {} listed, skipping their lookup", phenotype.suffix());
        return Ok(Vec::new());
    }

    let db_path: PathBuf = db_path.to_path_buf();
    let table = table.to_string();

    let handle = tokio::task::spawn_blocking(move || {
        tracing::debug!(
            "Executing query to get the relatedness for {} {}",
            ids.len(),
            phenotype.suffix()
        );
        let store = SqliteStore::open(&db_path, table)?;
        store.collect_rows(&ids, PairScope::Within, page_size)
    });

    let rows = handle
        .await
        .map_err(|e| StoreError::Worker(format!("{} lookup: {}", phenotype.suffix(), e)))??;

    tracing::info!("Found {} rows for the {}", rows.len(), phenotype.suffix());
    Ok(rows)
}
