//! Tab-separated relatedness report

use crate::AnalysisError;
use relfinder_domain::{PairMap, RelatednessRow, ThresholdedPair};
use std::path::Path;

/// Fixed report header
pub const REPORT_HEADER: [&str; 3] = ["ID1", "ID2", "Estimated_relatedness"];

/// Write every pair of the map with `score >= threshold`
///
/// The file is created or truncated. Returns the number of data lines.
pub fn write_pair_map(
    pairs: &PairMap,
    path: impl AsRef<Path>,
    threshold: i64,
) -> Result<usize, AnalysisError> {
    write_pairs(pairs.thresholded(threshold), path.as_ref())
}

/// Write rows as returned by the store, with the same threshold rule
///
/// Used when rows may name identifiers outside the input list.
pub fn write_rows<'a>(
    rows: impl IntoIterator<Item = &'a RelatednessRow>,
    path: impl AsRef<Path>,
    threshold: i64,
) -> Result<usize, AnalysisError> {
    let kept = rows.into_iter().filter_map(|row| row.thresholded(threshold));
    write_pairs(kept, path.as_ref())
}

fn write_pairs<'a>(
    pairs: impl Iterator<Item = ThresholdedPair<'a>>,
    path: &Path,
) -> Result<usize, AnalysisError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)?;

    writer.write_record(REPORT_HEADER)?;
    let mut written = 0;
    for pair in pairs {
        let score = pair.score.to_string();
        writer.write_record([pair.id1, pair.id2, score.as_str()])?;
        written += 1;
    }
    writer.flush()?;

    tracing::info!("Wrote {} pairs to {}", written, path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn abc_with_ab5() -> PairMap {
        let mut pairs = PairMap::new(["A", "B", "C"]);
        pairs.record(&RelatednessRow::new(1, "A", "B", 5));
        pairs
    }

    #[test]
    fn test_threshold_zero_keeps_every_pair() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.tsv");

        let written = write_pair_map(&abc_with_ab5(), &path, 0).unwrap();
        assert_eq!(written, 3);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "ID1\tID2\tEstimated_relatedness\nA\tB\t5\nA\tC\t0\nB\tC\t0\n"
        );
    }

    #[test]
    fn test_threshold_filters_pairs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.tsv");

        write_pair_map(&abc_with_ab5(), &path, 5).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "ID1\tID2\tEstimated_relatedness\nA\tB\t5\n"
        );

        let written = write_pair_map(&abc_with_ab5(), &path, 6).unwrap();
        assert_eq!(written, 0);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "ID1\tID2\tEstimated_relatedness\n"
        );
    }

    #[test]
    fn test_rows_use_the_same_threshold() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.tsv");
        let rows = vec![
            RelatednessRow::new(1, "A", "Z", 1),
            RelatednessRow::new(2, "Q", "A", 4),
        ];

        let written = write_rows(&rows, &path, 2).unwrap();
        assert_eq!(written, 1);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "ID1\tID2\tEstimated_relatedness\nQ\tA\t4\n"
        );
    }

    #[test]
    fn test_ids_are_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.tsv");
        let rows = vec![RelatednessRow::new(1, "A\"1", "B,2", 3)];

        write_rows(&rows, &path, 0).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().nth(1), Some("A\"1\tB,2\t3"));
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("report.tsv");
        assert!(write_pair_map(&abc_with_ab5(), &path, 0).is_err());
    }
}
