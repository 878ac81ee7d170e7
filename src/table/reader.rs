use crate::error::{RankError, Result};
use crate::table::filesystem::resolve_inputs;
use crate::types::record::MetricRecord;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MetricTable {
    pub sources: Vec<PathBuf>,
    pub digest: String,
    pub records: Vec<MetricRecord>,
}

pub fn read_metric_table(path: &Path) -> Result<MetricTable> {
    if !path.exists() {
        return Err(RankError::PathNotFound(path.display().to_string()));
    }

    let sources = resolve_inputs(path);
    let mut hasher = Sha256::new();
    let mut records = Vec::new();
    for source in &sources {
        let bytes = fs::read(source)?;
        hasher.update(&bytes);
        let parsed = parse_metric_rows(&source.display().to_string(), &bytes)?;
        tracing::debug!(source = %source.display(), rows = parsed.len(), "read metadata rows");
        records.extend(parsed);
    }

    Ok(MetricTable {
        sources,
        digest: hex(&hasher.finalize()),
        records,
    })
}

pub fn parse_metric_rows(source: &str, bytes: &[u8]) -> Result<Vec<MetricRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|position| position.line()).unwrap_or(0);
        records.push(MetricRecord::from_row(
            format!("{source}:{line}"),
            headers.iter(),
            row.iter(),
        ));
    }
    Ok(records)
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_metric_rows_keeps_header_order_and_line_numbers() {
        let records = parse_metric_rows(
            "repos.csv",
            b"repository_owner,forks_count\nacme_one,3\nacme_two,4\n",
        )
        .expect("rows should parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].location(), "repos.csv:3");
        assert_eq!(
            records[0].field_names().collect::<Vec<_>>(),
            vec!["repository_owner", "forks_count"]
        );
    }

    #[test]
    fn ragged_row_is_a_csv_error() {
        let err = parse_metric_rows("repos.csv", b"a,b\n1,2,3\n").expect_err("ragged row");
        assert!(matches!(err, RankError::Csv(_)));
    }

    #[test]
    fn read_metric_table_concatenates_directory_inputs() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("b.csv"), "repository_owner\nsecond\n").expect("b write");
        fs::write(dir.path().join("a.csv"), "repository_owner\nfirst\n").expect("a write");

        let table = read_metric_table(dir.path()).expect("table should read");
        assert_eq!(table.sources.len(), 2);
        let owners = table
            .records
            .iter()
            .map(|record| record.display_name())
            .collect::<Vec<_>>();
        assert_eq!(owners, vec!["first", "second"]);
        assert_eq!(table.digest.len(), 64);
    }

    #[test]
    fn read_metric_table_rejects_missing_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = read_metric_table(&dir.path().join("missing.csv")).expect_err("missing path");
        assert!(matches!(err, RankError::PathNotFound(_)));
    }
}
