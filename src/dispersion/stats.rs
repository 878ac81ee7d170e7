use crate::types::number::round2;
use crate::types::report::{DispersionStats, DispersionSummary};

pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / n;
    Some(variance.sqrt())
}

/// Running sum, min and max of per-row deviations. Min and max start at the
/// first pushed value.
#[derive(Debug, Clone, Default)]
pub struct DispersionAccumulator {
    sum: f64,
    rows: usize,
    skipped: usize,
    min: Option<f64>,
    max: Option<f64>,
}

impl DispersionAccumulator {
    pub fn push(&mut self, std_dev: f64) {
        self.sum += std_dev;
        self.rows += 1;
        self.min = Some(self.min.map_or(std_dev, |min| min.min(std_dev)));
        self.max = Some(self.max.map_or(std_dev, |max| max.max(std_dev)));
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn finish(&self) -> DispersionSummary {
        let pstdev = match (self.min, self.max) {
            (Some(min), Some(max)) if self.rows > 0 => Some(DispersionStats {
                avg: round2(self.sum / self.rows as f64),
                min: round2(min),
                max: round2(max),
            }),
            _ => None,
        };
        DispersionSummary {
            rows_counted: self.rows,
            rows_without_contributors: self.skipped,
            pstdev,
        }
    }
}
