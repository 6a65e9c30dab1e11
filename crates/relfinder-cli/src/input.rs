//! Identifier files.
//!
//! Tab-separated, one individual per line: the identifier, then optionally a
//! phenotype flag (`1` case, `0` control). Files ending in `.gz` are read
//! through a gzip decoder. Header lines (a field equal to `grid`, `grids`,
//! `iid` or `iids`, any case) and blank lines are skipped.

use crate::error::{CliError, Result};
use flate2::read::MultiGzDecoder;
use relfinder_domain::{Cohort, Identifier, Phenotype};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const HEADER_TOKENS: [&str; 4] = ["grid", "grids", "iid", "iids"];

/// Read a plain identifier list, ignoring any phenotype column.
///
/// Identifiers keep their first-appearance order; repeats are dropped.
pub fn read_identifiers(path: &Path) -> Result<Vec<Identifier>> {
    tracing::debug!("Reading in grids from the file {}", path.display());

    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for_each_line(path, |line, fields| {
        if fields.len() > 2 {
            return Err(format_error(
                path,
                line,
                "Expected an ID per line, optionally followed by a phenotype column.",
            ));
        }
        if fields[0].is_empty() {
            return Err(format_error(path, line, "The ID field is empty."));
        }
        push_unique(&mut seen, &mut ids, fields[0], path, line);
        Ok(())
    })?;

    tracing::info!("Identified {} grids in the file: {}", ids.len(), path.display());
    Ok(ids)
}

/// Read identifiers and split them into cases and controls.
pub fn read_cohort(path: &Path) -> Result<Cohort> {
    tracing::debug!("Identifying grids within the provided file: {}", path.display());

    let mut seen = HashSet::new();
    let mut cohort = Cohort::default();
    for_each_line(path, |line, fields| {
        if fields.len() != 2 {
            return Err(format_error(
                path,
                line,
                "Expected two columns: the ID and the phenotype.",
            ));
        }
        if fields[0].is_empty() {
            return Err(format_error(path, line, "The ID field is empty."));
        }
        let phenotype = Phenotype::parse(fields[1]).ok_or_else(|| {
            format_error(
                path,
                line,
                &format!("Phenotype must be 1 (case) or 0 (control), found '{}'.", fields[1]),
            )
        })?;

        if seen.insert(fields[0].to_string()) {
            cohort.push(fields[0].to_string(), phenotype);
        } else {
            tracing::warn!("Duplicate ID {} at line {} of {}", fields[0], line, path.display());
        }
        Ok(())
    })?;

    tracing::info!(
        "Identified {} case ids and {} control ids in the grid file: {}",
        cohort.cases.len(),
        cohort.controls.len(),
        path.display()
    );
    Ok(cohort)
}

fn push_unique(
    seen: &mut HashSet<Identifier>,
    ids: &mut Vec<Identifier>,
    id: &str,
    path: &Path,
    line: u64,
) {
    if seen.insert(id.to_string()) {
        ids.push(id.to_string());
    } else {
        tracing::warn!("Duplicate ID {} at line {} of {}", id, line, path.display());
    }
}

fn format_error(path: &Path, line: u64, reason: &str) -> CliError {
    CliError::Format {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}

/// Open a file, decompressing when it ends in `.gz`.
fn open(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(reader)
}

/// Call `f` with the 1-based line number and trimmed fields of every data line.
fn for_each_line<F>(path: &Path, mut f: F) -> Result<()>
where
    F: FnMut(u64, &[&str]) -> Result<()>,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(open(path)?);

    let mut record = csv::StringRecord::new();
    loop {
        let more = reader
            .read_record(&mut record)
            .map_err(|e| read_error(path, e))?;
        if !more {
            break;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let fields: Vec<&str> = record.iter().collect();

        if fields.iter().all(|field| field.is_empty()) {
            continue;
        }
        if is_header(&fields) {
            tracing::debug!("Skipping header line {} of {}", line, path.display());
            continue;
        }
        f(line, &fields)?;
    }
    Ok(())
}

fn is_header(fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|field| HEADER_TOKENS.iter().any(|token| field.eq_ignore_ascii_case(token)))
}

fn read_error(path: &Path, e: csv::Error) -> CliError {
    match e.position() {
        Some(pos) if !e.is_io_error() => format_error(path, pos.line(), &e.to_string()),
        _ => CliError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_case_control_split() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pheno.txt", "A\t1\nB\t0\ngrid\tpheno\n");

        let cohort = read_cohort(&path).unwrap();
        assert_eq!(cohort.cases, vec!["A"]);
        assert_eq!(cohort.controls, vec!["B"]);
    }

    #[test]
    fn test_header_tokens_are_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ids.txt", "IID\tstatus\nR1\t1\nGRIDS\nR2\t0\n");

        let ids = read_identifiers(&path).unwrap();
        assert_eq!(ids, vec!["R1", "R2"]);
    }

    #[test]
    fn test_identifier_list_accepts_one_column() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ids.txt", "R1\nR2\r\n\nR3\t1\nR1\n");

        let ids = read_identifiers(&path).unwrap();
        assert_eq!(ids, vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn test_malformed_line_names_file_and_line() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pheno.txt", "A\t1\nB\t0\nC\n");

        match read_cohort(&path) {
            Err(CliError::Format { path: p, line, .. }) => {
                assert_eq!(p, path);
                assert_eq!(line, 3);
            }
            other => panic!("Expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_phenotype_is_a_format_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "pheno.txt", "A\t1\nB\t2\n");

        let err = read_cohort(&path).unwrap_err();
        assert!(matches!(err, CliError::Format { line: 2, .. }));
        assert!(err.to_string().contains("pheno.txt"));
    }

    #[test]
    fn test_empty_id_is_a_format_error() {
        let dir = TempDir::new().unwrap();
        let list = write_file(&dir, "ids.txt", "R1\n\tX\n");
        assert!(matches!(
            read_identifiers(&list),
            Err(CliError::Format { line: 2, .. })
        ));

        let pheno = write_file(&dir, "pheno.txt", "A\t1\n \t0\n");
        assert!(matches!(
            read_cohort(&pheno),
            Err(CliError::Format { line: 2, .. })
        ));
    }

    #[test]
    fn test_too_many_columns_in_identifier_list() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ids.txt", "R1\t1\textra\n");
        assert!(matches!(
            read_identifiers(&path),
            Err(CliError::Format { line: 1, .. })
        ));
    }

    #[test]
    fn test_gzip_reads_like_plain_text() {
        let dir = TempDir::new().unwrap();
        let contents = "grid\tphenotype\nA\t1\nB\t0\nC\t1\n";
        let plain = write_file(&dir, "pheno.txt", contents);

        let gz_path = dir.path().join("pheno.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
        encoder.write_all(contents.as_bytes()).unwrap();
        encoder.finish().unwrap();

        assert_eq!(read_cohort(&plain).unwrap(), read_cohort(&gz_path).unwrap());
        assert_eq!(read_cohort(&gz_path).unwrap().cases, vec!["A", "C"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_identifiers(Path::new("/nonexistent/ids.txt"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
