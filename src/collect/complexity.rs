use crate::collect::MetadataPart;
use crate::error::{RankError, Result};
use crate::types::fields::{AVERAGE_CYCLOMATIC_COMPLEXITY, AVERAGE_MAINTAINABILITY_INDEX};
use crate::types::number::round2;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ComplexityReport {
    pub files: Vec<FileComplexity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileComplexity {
    pub filename: String,
    /// Tokens in the file, closing brackets excluded.
    pub token_count: u64,
    pub unique_token_count: u64,
    #[serde(default)]
    pub functions: Vec<FunctionComplexity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionComplexity {
    pub cyclomatic_complexity: f64,
    pub nloc: f64,
}

/// `171 - 5.2 ln(HV) - 0.23 CC - 16.2 ln(NLOC)`
pub fn maintainability_index(halstead_volume: f64, cyclomatic_complexity: f64, nloc: f64) -> f64 {
    171.0 - 5.2 * halstead_volume.ln() - 0.23 * cyclomatic_complexity - 16.2 * nloc.ln()
}

impl FileComplexity {
    fn mean_of(&self, metric: impl Fn(&FunctionComplexity) -> f64) -> f64 {
        self.functions.iter().map(metric).sum::<f64>() / self.functions.len() as f64
    }

    pub fn average_cyclomatic_complexity(&self) -> Option<f64> {
        (!self.functions.is_empty())
            .then(|| self.mean_of(|function| function.cyclomatic_complexity))
    }

    pub fn average_halstead_volume(&self) -> Option<f64> {
        if self.functions.is_empty() {
            return None;
        }
        let volume = self.token_count as f64 * (self.unique_token_count as f64).log2();
        Some(round2(volume / self.functions.len() as f64))
    }

    /// `None` for files without functions or with a non-finite index.
    pub fn maintainability_index(&self) -> Option<f64> {
        let halstead_volume = self.average_halstead_volume()?;
        let cyclomatic_complexity = self.average_cyclomatic_complexity()?;
        let nloc = self.mean_of(|function| function.nloc);
        let index = maintainability_index(halstead_volume, cyclomatic_complexity, nloc);
        index.is_finite().then_some(index)
    }
}

pub fn parse_report(json: &str) -> Result<ComplexityReport> {
    serde_json::from_str(json).map_err(|e| RankError::Collect(format!("complexity report: {e}")))
}

/// Repository averages over files with a usable index; the sentinel for
/// both fields when no file qualifies.
pub fn complexity_part(report: &ComplexityReport) -> MetadataPart {
    let mut total_complexity = 0.0;
    let mut total_index = 0.0;
    let mut files = 0usize;
    for file in &report.files {
        let (Some(index), Some(complexity)) = (
            file.maintainability_index(),
            file.average_cyclomatic_complexity(),
        ) else {
            tracing::debug!(file = %file.filename, "skipping file without usable complexity");
            continue;
        };
        total_complexity += complexity;
        total_index += index;
        files += 1;
    }

    if files == 0 {
        return MetadataPart::unavailable(&[
            AVERAGE_CYCLOMATIC_COMPLEXITY,
            AVERAGE_MAINTAINABILITY_INDEX,
        ]);
    }
    MetadataPart::new()
        .number(AVERAGE_CYCLOMATIC_COMPLEXITY, round2(total_complexity / files as f64))
        .number(AVERAGE_MAINTAINABILITY_INDEX, round2(total_index / files as f64))
}
