pub mod pattern;
pub mod stats;

use crate::types::report::DispersionSummary;
use pattern::PatternRow;
use stats::{population_std_dev, DispersionAccumulator};

pub fn summarize(rows: &[PatternRow]) -> DispersionSummary {
    let mut acc = DispersionAccumulator::default();
    for row in rows {
        match population_std_dev(&row.shares()) {
            Some(std_dev) => {
                tracing::debug!(line = row.line, pattern = %row.pattern, std_dev, "row pstdev");
                acc.push(std_dev);
            }
            None => acc.skip(),
        }
    }
    acc.finish()
}
