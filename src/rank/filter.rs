use crate::error::Result;
use crate::types::fields::REPO_AGE_IN_DAYS;
use crate::types::record::MetricRecord;
use crate::types::report::{DropReason, DroppedRecord};

pub fn partition_valid(
    records: Vec<MetricRecord>,
    sentinel: &str,
) -> Result<(Vec<MetricRecord>, Vec<DroppedRecord>)> {
    let mut valid = Vec::with_capacity(records.len());
    let mut dropped = Vec::new();

    for record in records {
        let reason = match record.sentinel_field(sentinel) {
            Some(field) => Some(DropReason::Sentinel {
                field: field.to_string(),
            }),
            None => {
                let age = record.number(REPO_AGE_IN_DAYS)?;
                (age <= 0.0).then_some(DropReason::NonPositiveAge { age })
            }
        };

        match reason {
            Some(reason) => {
                tracing::warn!(
                    location = record.location(),
                    repository = %record.display_name(),
                    %reason,
                    "dropping record"
                );
                dropped.push(DroppedRecord {
                    location: record.location().to_string(),
                    repository: record.display_name(),
                    reason,
                });
            }
            None => valid.push(record),
        }
    }

    Ok((valid, dropped))
}
