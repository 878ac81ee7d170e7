use serde::{Deserialize, Serialize};

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBundle {
    #[serde(rename = "popularity_score")]
    pub popularity: Score,
    #[serde(rename = "maintainability_score")]
    pub maintainability: Score,
    #[serde(rename = "quality_score")]
    pub quality: Score,
    #[serde(rename = "overall_score")]
    pub overall: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaintainabilityWeights {
    pub maintainability_index: f64,
    pub closed_two_year: f64,
    pub closed_one_year: f64,
    pub closed_six_months: f64,
    pub closed_one_month: f64,
    pub commits_by_age: f64,
}

impl Default for MaintainabilityWeights {
    fn default() -> Self {
        Self {
            maintainability_index: 0.51,
            closed_two_year: 0.09,
            closed_one_year: 0.09,
            closed_six_months: 0.09,
            closed_one_month: 0.12,
            commits_by_age: 0.12,
        }
    }
}

impl MaintainabilityWeights {
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("maintainability_index", self.maintainability_index),
            ("closed_two_year", self.closed_two_year),
            ("closed_one_year", self.closed_one_year),
            ("closed_six_months", self.closed_six_months),
            ("closed_one_month", self.closed_one_month),
            ("commits_by_age", self.commits_by_age),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, weight)| weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one_point_zero_two() {
        let weights = MaintainabilityWeights::default();
        assert!((weights.sum() - 1.02).abs() < 1e-9);
    }
}
