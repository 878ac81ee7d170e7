use crate::error::Result;
use crate::types::fields::{
    by_age, pct, per_nloc, AVERAGE_CYCLOMATIC_COMPLEXITY, AVERAGE_MAINTAINABILITY_INDEX,
    CLOSED_ONE_MONTH, CLOSED_ONE_YEAR, CLOSED_SIX_MONTHS, CLOSED_TWO_YEAR, MAINTAINABILITY_METRICS,
    MAINTAINABILITY_SCORE, OVERALL_SCORE, POPULARITY_METRICS, POPULARITY_SCORE, QUALITY_METRICS,
    QUALITY_SCORE,
};
use crate::types::number::round2;
use crate::types::record::MetricRecord;
use crate::types::scoring::{MaintainabilityWeights, ScoreBundle};

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn popularity_score(record: &MetricRecord) -> Result<f64> {
    let values = POPULARITY_METRICS
        .iter()
        .map(|metric| record.number(&pct(&by_age(metric))))
        .collect::<Result<Vec<_>>>()?;
    Ok(mean(&values))
}

pub fn maintainability_score(
    record: &MetricRecord,
    weights: &MaintainabilityWeights,
) -> Result<f64> {
    let weighted = [
        (AVERAGE_MAINTAINABILITY_INDEX.to_string(), weights.maintainability_index),
        (CLOSED_TWO_YEAR.to_string(), weights.closed_two_year),
        (CLOSED_ONE_YEAR.to_string(), weights.closed_one_year),
        (CLOSED_SIX_MONTHS.to_string(), weights.closed_six_months),
        (CLOSED_ONE_MONTH.to_string(), weights.closed_one_month),
        (by_age(MAINTAINABILITY_METRICS[0]), weights.commits_by_age),
    ];
    let mut score = 0.0;
    for (metric, weight) in weighted {
        score += weight * record.number(&pct(&metric))?;
    }
    Ok(score)
}

/// The inputs count problems, so a higher percentile lowers quality.
pub fn quality_score(record: &MetricRecord) -> Result<f64> {
    let values = std::iter::once(AVERAGE_CYCLOMATIC_COMPLEXITY.to_string())
        .chain(QUALITY_METRICS.iter().map(|metric| per_nloc(metric)))
        .map(|metric| record.number(&pct(&metric)))
        .collect::<Result<Vec<_>>>()?;
    Ok(100.0 - mean(&values))
}

impl ScoreBundle {
    /// Sub-scores are kept rounded to two decimals; the overall score is the
    /// rounded mean of the unrounded sub-scores.
    pub fn from_record(record: &MetricRecord, weights: &MaintainabilityWeights) -> Result<Self> {
        let quality = quality_score(record)?;
        let maintainability = maintainability_score(record, weights)?;
        let popularity = popularity_score(record)?;
        Ok(Self {
            popularity: round2(popularity),
            maintainability: round2(maintainability),
            quality: round2(quality),
            overall: round2((quality + maintainability + popularity) / 3.0),
        })
    }

    pub fn write_into(&self, record: &mut MetricRecord) {
        record.set(QUALITY_SCORE, self.quality);
        record.set(MAINTAINABILITY_SCORE, self.maintainability);
        record.set(POPULARITY_SCORE, self.popularity);
        record.set(OVERALL_SCORE, self.overall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_pcts(pairs: &[(&str, f64)]) -> MetricRecord {
        let mut record = MetricRecord::new("repos.csv:2");
        for (name, value) in pairs {
            record.set(name, *value);
        }
        record
    }

    fn full_record(value: f64) -> MetricRecord {
        let names = crate::types::fields::scaled_metrics();
        let pairs = names
            .iter()
            .map(|name| (pct(name), value))
            .collect::<Vec<_>>();
        let mut record = MetricRecord::new("repos.csv:2");
        for (name, value) in pairs {
            record.set(&name, value);
        }
        record
    }

    #[test]
    fn popularity_is_the_mean_of_age_normalized_percentiles() {
        let record = record_with_pcts(&[
            ("subscribers_count_by_age_pct", 10.0),
            ("stargazers_count_by_age_pct", 20.0),
            ("forks_count_by_age_pct", 60.0),
        ]);
        assert_eq!(popularity_score(&record).expect("popularity"), 30.0);
    }

    #[test]
    fn maintainability_uses_configured_weights() {
        let record = full_record(100.0);
        let score = maintainability_score(&record, &MaintainabilityWeights::default())
            .expect("maintainability");
        assert!((score - 102.0).abs() < 1e-9);
    }

    #[test]
    fn quality_inverts_problem_percentiles() {
        let record = full_record(100.0);
        assert_eq!(quality_score(&record).expect("quality"), 0.0);
        let clean = full_record(0.0);
        assert_eq!(quality_score(&clean).expect("quality"), 100.0);
    }

    #[test]
    fn bundle_stays_within_bounds_at_extremes() {
        for value in [0.0, 37.5, 100.0] {
            let bundle = ScoreBundle::from_record(
                &full_record(value),
                &MaintainabilityWeights::default(),
            )
            .expect("bundle should compute");
            assert!((0.0..=100.0).contains(&bundle.overall));
            assert!((0.0..=100.0).contains(&bundle.quality));
            assert!((0.0..=100.0).contains(&bundle.popularity));
            assert!((0.0..=102.0).contains(&bundle.maintainability));
        }
    }

    #[test]
    fn write_into_appends_scores_in_fixed_order() {
        let bundle = ScoreBundle {
            popularity: 1.0,
            maintainability: 2.0,
            quality: 3.0,
            overall: 2.0,
        };
        let mut record = MetricRecord::new("repos.csv:2");
        bundle.write_into(&mut record);
        assert_eq!(
            record.field_names().collect::<Vec<_>>(),
            vec![
                "quality_score",
                "maintainability_score",
                "popularity_score",
                "overall_score"
            ]
        );
    }
}
