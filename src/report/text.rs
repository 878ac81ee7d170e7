use crate::types::number::format_number;
use crate::types::report::DispersionSummary;

pub const NO_CONTRIBUTOR_ROWS: &str = "no pattern rows with contributors";

pub fn to_text(summary: &DispersionSummary) -> String {
    match &summary.pstdev {
        Some(stats) => format!(
            "avg pstdev: {}\nmin pstdev: {}\nmax pstdev: {}",
            format_number(stats.avg),
            format_number(stats.min),
            format_number(stats.max)
        ),
        None => NO_CONTRIBUTOR_ROWS.to_string(),
    }
}
