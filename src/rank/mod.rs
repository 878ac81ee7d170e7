pub mod filter;
pub mod normalize;
pub mod percentile;
pub mod scores;

use crate::error::Result;
use crate::types::config::{RankConfig, DEFAULT_SENTINEL};
use crate::types::fields::{scaled_metrics, REPOSITORY_URI};
use crate::types::record::MetricRecord;
use crate::types::report::{DroppedRecord, RankEntry, SpanEntry};
use crate::types::scoring::{MaintainabilityWeights, ScoreBundle};

#[derive(Debug, Clone)]
pub struct RankOptions {
    pub sentinel: String,
    pub normalize_quality_by_nloc: bool,
    pub weights: MaintainabilityWeights,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            normalize_quality_by_nloc: false,
            weights: MaintainabilityWeights::default(),
        }
    }
}

impl RankOptions {
    pub fn from_config(config: Option<&RankConfig>) -> Self {
        match config {
            Some(cfg) => {
                let weights = cfg.maintainability_weights();
                tracing::debug!(weight_sum = weights.sum(), "maintainability weights");
                Self {
                    sentinel: cfg.sentinel().to_string(),
                    normalize_quality_by_nloc: cfg.normalize_quality_by_nloc(),
                    weights,
                }
            }
            None => Self::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ranking {
    pub records: Vec<MetricRecord>,
    pub scores: Vec<ScoreBundle>,
    pub dropped: Vec<DroppedRecord>,
    pub spans: Vec<SpanEntry>,
}

impl Ranking {
    pub fn entries(&self) -> Vec<RankEntry> {
        self.records
            .iter()
            .zip(&self.scores)
            .enumerate()
            .map(|(index, (record, scores))| RankEntry {
                rank: index + 1,
                repository_owner: record.display_name(),
                repository_uri: record.text(REPOSITORY_URI).unwrap_or_default(),
                scores: *scores,
            })
            .collect()
    }
}

pub fn rank_records(records: Vec<MetricRecord>, options: &RankOptions) -> Result<Ranking> {
    let (mut valid, dropped) = filter::partition_valid(records, &options.sentinel)?;
    tracing::info!(
        valid = valid.len(),
        dropped = dropped.len(),
        "filtered metadata records"
    );
    if valid.is_empty() {
        return Ok(Ranking {
            records: Vec::new(),
            scores: Vec::new(),
            dropped,
            spans: Vec::new(),
        });
    }

    for record in &mut valid {
        normalize::normalize_record(record, options.normalize_quality_by_nloc)?;
    }
    let spans = percentile::scale_records(&mut valid, &scaled_metrics())?;

    let mut scored = valid
        .into_iter()
        .map(|mut record| -> Result<(MetricRecord, ScoreBundle)> {
            let bundle = ScoreBundle::from_record(&record, &options.weights)?;
            bundle.write_into(&mut record);
            Ok((record, bundle))
        })
        .collect::<Result<Vec<_>>>()?;

    // `sort_by` is stable, so equal scores keep input order.
    scored.sort_by(|(_, a), (_, b)| b.overall.total_cmp(&a.overall));

    let (records, scores) = scored.into_iter().unzip();
    Ok(Ranking {
        records,
        scores,
        dropped,
        spans,
    })
}
