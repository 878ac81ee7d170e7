use crate::error::Result;
use crate::types::fields::{
    by_age, per_nloc, MAINTAINABILITY_METRICS, NLOC, POPULARITY_METRICS, QUALITY_METRICS,
    REPO_AGE_IN_DAYS,
};
use crate::types::number::round2;
use crate::types::record::MetricRecord;

/// Expects a positive age; the validity filter guarantees it.
pub fn normalize_record(record: &mut MetricRecord, quality_per_nloc: bool) -> Result<()> {
    let age = record.number(REPO_AGE_IN_DAYS)?;
    for metric in POPULARITY_METRICS.iter().chain(MAINTAINABILITY_METRICS.iter()) {
        let value = record.number(metric)?;
        record.set(&by_age(metric), round2(value / age));
    }

    if quality_per_nloc {
        let nloc = record.number(NLOC)?;
        let divisor = if nloc == 0.0 { 1.0 } else { nloc };
        for metric in QUALITY_METRICS {
            let value = record.number(metric)?;
            record.set(&per_nloc(metric), round2(value / divisor));
        }
    }
    Ok(())
}
