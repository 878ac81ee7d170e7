use crate::collect::{MetadataPart, SENTINEL};
use crate::error::{RankError, Result};
use crate::types::fields::per_nloc;
use crate::types::number::round_to;

const TOTAL_ERRORS_PREFIX: &str = "Total errors found:";
const STYLE_ERRORS: &str = "style_errors";

pub fn cpplint_error_count(log: &str) -> Result<u64> {
    let Some(line) = log
        .lines()
        .rev()
        .find(|line| line.trim_start().starts_with(TOTAL_ERRORS_PREFIX))
    else {
        return Ok(0);
    };
    let raw = line.split_whitespace().last().unwrap_or_default();
    raw.parse::<u64>()
        .map_err(|_| RankError::Collect(format!("unreadable cpplint total: {line:?}")))
}

pub fn style_part(log: &str, nloc: u64) -> Result<MetadataPart> {
    let errors = cpplint_error_count(log)?;
    let divisor = nloc.max(1) as f64;
    Ok(MetadataPart::new()
        .integer(STYLE_ERRORS, errors as i64)
        .number(&per_nloc(STYLE_ERRORS), round_to(errors as f64 / divisor, 3)))
}

pub fn unavailable_part() -> MetadataPart {
    MetadataPart::new()
        .integer(STYLE_ERRORS, SENTINEL)
        .integer(&per_nloc(STYLE_ERRORS), SENTINEL)
}
