use crate::collect::{MetadataPart, SENTINEL};
use crate::error::{RankError, Result};
use crate::types::fields::per_nloc;
use crate::types::number::round_to;
use serde_json::Value;

pub const SECURITY_FIELDS: [&str; 3] = ["security_notes", "security_warnings", "security_errors"];

const SLOC_PREFIX: &str = "Physical Source Lines of Code (SLOC)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecurityCounts {
    pub notes: u64,
    pub warnings: u64,
    pub errors: u64,
}

/// Tallies `runs[0].results[*].level`. `None` when the SARIF has no results
/// array, which flawfinder only produces when the scan failed.
pub fn count_levels(sarif: &Value) -> Option<SecurityCounts> {
    let results = sarif.get("runs")?.get(0)?.get("results")?.as_array()?;
    let mut counts = SecurityCounts::default();
    for result in results {
        match result.get("level").and_then(Value::as_str) {
            Some("note") => counts.notes += 1,
            Some("warning") => counts.warnings += 1,
            Some("error") => counts.errors += 1,
            other => tracing::warn!(level = ?other, "unhandled security level"),
        }
    }
    Some(counts)
}

pub fn sloc_from_stats(stats: &str) -> Result<f64> {
    let line = stats
        .lines()
        .find(|line| line.starts_with(SLOC_PREFIX))
        .ok_or_else(|| RankError::Collect("flawfinder stats carry no SLOC line".to_string()))?;
    let raw = line.split_whitespace().last().unwrap_or_default();
    raw.parse::<f64>()
        .map_err(|_| RankError::Collect(format!("unreadable flawfinder SLOC: {line:?}")))
}

pub fn security_part(sarif_json: &str, stats: &str) -> Result<MetadataPart> {
    let sarif: Value = serde_json::from_str(sarif_json)
        .map_err(|e| RankError::Collect(format!("flawfinder sarif: {e}")))?;
    let sloc = sloc_from_stats(stats)?;
    let divisor = if sloc == 0.0 { 1.0 } else { sloc };

    let Some(counts) = count_levels(&sarif) else {
        tracing::warn!("flawfinder sarif has no results; marking security fields unavailable");
        return Ok(unavailable_part());
    };

    let values = [counts.notes, counts.warnings, counts.errors];
    let mut part = MetadataPart::new();
    for (name, value) in SECURITY_FIELDS.iter().zip(values) {
        part = part.integer(name, value as i64);
    }
    for (name, value) in SECURITY_FIELDS.iter().zip(values) {
        part = part.number(&per_nloc(name), round_to(value as f64 / divisor, 3));
    }
    Ok(part)
}

pub fn unavailable_part() -> MetadataPart {
    let per_nloc_fields = SECURITY_FIELDS.map(per_nloc);
    SECURITY_FIELDS
        .iter()
        .copied()
        .chain(per_nloc_fields.iter().map(String::as_str))
        .fold(MetadataPart::new(), |part, name| part.integer(name, SENTINEL))
}
