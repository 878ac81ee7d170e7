use crate::types::scoring::ScoreBundle;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropReason {
    Sentinel { field: String },
    NonPositiveAge { age: f64 },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentinel { field } => write!(f, "sentinel value in `{field}`"),
            Self::NonPositiveAge { age } => write!(f, "repo_age_in_days is {age}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DroppedRecord {
    pub location: String,
    pub repository: String,
    pub reason: DropReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSpan {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpanEntry {
    pub metric: String,
    #[serde(flatten)]
    pub span: MetricSpan,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    pub rank: usize,
    pub repository_owner: String,
    pub repository_uri: String,
    pub scores: ScoreBundle,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub generated_at: String,
    pub input_digest: String,
    pub sources: Vec<String>,
    pub output: String,
    pub records_read: usize,
    pub ranked: Vec<RankEntry>,
    pub dropped: Vec<DroppedRecord>,
    pub spans: Vec<SpanEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DispersionStats {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispersionSummary {
    pub rows_counted: usize,
    pub rows_without_contributors: usize,
    /// `None` when no row had contributors.
    pub pstdev: Option<DispersionStats>,
}
