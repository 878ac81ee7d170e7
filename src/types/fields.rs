//! Column vocabulary shared by the collector and the ranking engine.

pub const REPOSITORY_OWNER: &str = "repository_owner";
pub const REPOSITORY_URI: &str = "repository_uri";
pub const REPO_AGE_IN_DAYS: &str = "repo_age_in_days";
pub const NLOC: &str = "nloc";

pub const POPULARITY_METRICS: [&str; 3] = ["subscribers_count", "stargazers_count", "forks_count"];
pub const MAINTAINABILITY_METRICS: [&str; 1] = ["num_commits"];
pub const QUALITY_METRICS: [&str; 4] = [
    "style_errors",
    "security_notes",
    "security_warnings",
    "security_errors",
];

pub const AVERAGE_CYCLOMATIC_COMPLEXITY: &str = "average_cyclomatic_complexity_for_repo";
pub const AVERAGE_MAINTAINABILITY_INDEX: &str = "average_maintainability_index_for_repo";
pub const CLOSED_TWO_YEAR: &str = "closed_issues_and_pr_over_two_year";
pub const CLOSED_ONE_YEAR: &str = "closed_issues_and_pr_over_one_year";
pub const CLOSED_SIX_MONTHS: &str = "closed_issues_and_pr_over_six_months";
pub const CLOSED_ONE_MONTH: &str = "closed_issues_and_pr_over_one_month";

/// Metrics scaled as they come, without age or size normalization.
pub const NON_NORMALIZED_METRICS: [&str; 6] = [
    AVERAGE_CYCLOMATIC_COMPLEXITY,
    AVERAGE_MAINTAINABILITY_INDEX,
    CLOSED_TWO_YEAR,
    CLOSED_ONE_YEAR,
    CLOSED_SIX_MONTHS,
    CLOSED_ONE_MONTH,
];

pub const QUALITY_SCORE: &str = "quality_score";
pub const MAINTAINABILITY_SCORE: &str = "maintainability_score";
pub const POPULARITY_SCORE: &str = "popularity_score";
pub const OVERALL_SCORE: &str = "overall_score";

pub fn by_age(metric: &str) -> String {
    format!("{metric}_by_age")
}

pub fn per_nloc(metric: &str) -> String {
    format!("{metric}_per_nloc")
}

pub fn pct(metric: &str) -> String {
    format!("{metric}_pct")
}

pub fn scaled_metrics() -> Vec<String> {
    POPULARITY_METRICS
        .iter()
        .map(|metric| by_age(metric))
        .chain(QUALITY_METRICS.iter().map(|metric| per_nloc(metric)))
        .chain(MAINTAINABILITY_METRICS.iter().map(|metric| by_age(metric)))
        .chain(NON_NORMALIZED_METRICS.iter().map(|metric| metric.to_string()))
        .collect()
}

/// Leading columns of the ranked table; compact output is exactly these.
pub fn output_columns() -> Vec<String> {
    [
        REPOSITORY_OWNER,
        REPOSITORY_URI,
        OVERALL_SCORE,
        QUALITY_SCORE,
        MAINTAINABILITY_SCORE,
        POPULARITY_SCORE,
    ]
    .iter()
    .map(|name| name.to_string())
    .chain(QUALITY_METRICS.iter().map(|metric| per_nloc(metric)))
    .chain(POPULARITY_METRICS.iter().map(|metric| by_age(metric)))
    .chain(std::iter::once(pct(AVERAGE_CYCLOMATIC_COMPLEXITY)))
    .collect()
}
