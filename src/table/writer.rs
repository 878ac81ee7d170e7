use crate::error::{RankError, Result};
use crate::types::fields::output_columns;
use crate::types::record::MetricRecord;
use std::io::Write;
use std::path::Path;

pub fn ranked_columns(records: &[MetricRecord], detailed: bool) -> Vec<String> {
    let mut columns = output_columns();
    if detailed {
        if let Some(first) = records.first() {
            for name in first.field_names() {
                if !columns.iter().any(|column| column == name) {
                    columns.push(name.to_string());
                }
            }
        }
    }
    columns
}

pub fn write_ranked<W: Write>(out: W, records: &[MetricRecord], detailed: bool) -> Result<()> {
    let columns = ranked_columns(records, detailed);
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&columns)?;
    for record in records {
        let row = columns
            .iter()
            .map(|column| {
                record.text(column).ok_or_else(|| RankError::MissingField {
                    location: record.location().to_string(),
                    field: column.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_ranked_file(path: &Path, records: &[MetricRecord], detailed: bool) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_ranked(file, records, detailed)
}
