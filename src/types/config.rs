use crate::error::RankError;
use crate::types::scoring::MaintainabilityWeights;
use serde::Deserialize;

pub const DEFAULT_SENTINEL: &str = "-1";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Sum of the default maintainability weights; keeps the score within 0..=102.
pub const MAX_WEIGHT_SUM: f64 = 1.02;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankConfig {
    pub ranking: Option<RankingConfig>,
    pub weights: Option<WeightsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub detailed: bool,
    #[serde(default)]
    pub normalize_quality_by_nloc: bool,
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default)]
    pub maintainability: MaintainabilityWeights,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl RankConfig {
    pub fn detailed(&self) -> bool {
        self.ranking
            .as_ref()
            .map(|ranking| ranking.detailed)
            .unwrap_or(false)
    }

    pub fn normalize_quality_by_nloc(&self) -> bool {
        self.ranking
            .as_ref()
            .map(|ranking| ranking.normalize_quality_by_nloc)
            .unwrap_or(false)
    }

    pub fn sentinel(&self) -> &str {
        self.ranking
            .as_ref()
            .map(|ranking| ranking.sentinel.as_str())
            .unwrap_or(DEFAULT_SENTINEL)
    }

    pub fn maintainability_weights(&self) -> MaintainabilityWeights {
        self.weights
            .as_ref()
            .map(|weights| weights.maintainability)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .map(|logging| logging.level.as_str())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), RankError> {
        if self.sentinel().trim().is_empty() {
            return Err(RankError::ConfigParse(
                "ranking.sentinel cannot be empty".to_string(),
            ));
        }

        for (name, weight) in self.maintainability_weights().entries() {
            if !(0.0..=1.0).contains(&weight) {
                return Err(RankError::ConfigParse(format!(
                    "weights.maintainability.{name} must be between 0.0 and 1.0 (found {weight})"
                )));
            }
        }

        let weight_sum = self.maintainability_weights().sum();
        if weight_sum > MAX_WEIGHT_SUM + 1e-9 {
            return Err(RankError::ConfigParse(format!(
                "weights.maintainability must sum to at most {MAX_WEIGHT_SUM} (found {weight_sum})"
            )));
        }

        if !matches!(
            self.log_level(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(RankError::ConfigParse(format!(
                "unsupported logging.level: {}",
                self.log_level()
            )));
        }

        Ok(())
    }
}
