use crate::collect::{MetadataPart, SENTINEL};
use crate::error::{RankError, Result};
use crate::types::fields::{
    CLOSED_ONE_MONTH, CLOSED_ONE_YEAR, CLOSED_SIX_MONTHS, CLOSED_TWO_YEAR, REPO_AGE_IN_DAYS,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

pub const REPOSITORY_FIELDS: [&str; 6] = [
    "stargazers_count",
    "subscribers_count",
    "forks_count",
    "open_issues",
    REPO_AGE_IN_DAYS,
    "created_at",
];

#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    stargazers_count: i64,
    subscribers_count: i64,
    forks_count: i64,
    open_issues: i64,
    created_at: DateTime<Utc>,
}

pub fn repository_part(json: &str, now: DateTime<Utc>) -> Result<MetadataPart> {
    let response: RepositoryResponse = serde_json::from_str(json)
        .map_err(|e| RankError::Collect(format!("repository response: {e}")))?;
    let age_in_days = (now - response.created_at).num_days();

    Ok(MetadataPart::new()
        .integer("stargazers_count", response.stargazers_count)
        .integer("subscribers_count", response.subscribers_count)
        .integer("forks_count", response.forks_count)
        .integer("open_issues", response.open_issues)
        .integer(REPO_AGE_IN_DAYS, age_in_days)
        .text(
            "created_at",
            response
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        ))
}

/// Commit and issue counts gathered from the hosting API. Closed counts are
/// ordered two years, one year, six months, one month.
#[derive(Debug, Clone, Default)]
pub struct Activity {
    pub num_commits: Option<u64>,
    pub open_issues_and_pr_now: Option<u64>,
    pub closed_issues_and_pr: Option<[u64; 4]>,
}

pub fn activity_part(activity: &Activity) -> MetadataPart {
    let count = |value: Option<u64>| value.map_or(SENTINEL, |count| count as i64);
    let closed = activity
        .closed_issues_and_pr
        .map(|windows| windows.map(|count| count as i64))
        .unwrap_or([SENTINEL; 4]);

    MetadataPart::new()
        .integer("num_commits", count(activity.num_commits))
        .integer("open_issues_and_pr_now", count(activity.open_issues_and_pr_now))
        .integer(CLOSED_TWO_YEAR, closed[0])
        .integer(CLOSED_ONE_YEAR, closed[1])
        .integer(CLOSED_SIX_MONTHS, closed[2])
        .integer(CLOSED_ONE_MONTH, closed[3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::FieldValue;
    use chrono::TimeZone;

    const RESPONSE: &str = r#"{
        "id": 392565553,
        "full_name": "acme/widgets",
        "stargazers_count": 250,
        "subscribers_count": 12,
        "forks_count": 40,
        "open_issues": 7,
        "created_at": "2021-07-04T10:00:00Z"
    }"#;

    #[test]
    fn repository_part_derives_age_from_created_at() {
        let now = Utc
            .with_ymd_and_hms(2021, 10, 12, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        let part = repository_part(RESPONSE, now).expect("response should parse");
        assert_eq!(part.get(REPO_AGE_IN_DAYS), Some(&FieldValue::Integer(99)));
        assert_eq!(part.get("forks_count"), Some(&FieldValue::Integer(40)));
        assert_eq!(
            part.get("created_at"),
            Some(&FieldValue::Text("2021-07-04T10:00:00Z".to_string()))
        );
    }

    #[test]
    fn repository_part_rejects_incomplete_response() {
        let err = repository_part(r#"{"stargazers_count": 1}"#, Utc::now())
            .expect_err("missing fields should fail");
        assert!(err.to_string().contains("repository response"));
    }

    #[test]
    fn missing_activity_counts_become_sentinels() {
        let part = activity_part(&Activity {
            num_commits: Some(420),
            ..Activity::default()
        });
        assert_eq!(part.get("num_commits"), Some(&FieldValue::Integer(420)));
        assert_eq!(
            part.get("open_issues_and_pr_now"),
            Some(&FieldValue::Integer(SENTINEL))
        );
        assert_eq!(part.get(CLOSED_ONE_MONTH), Some(&FieldValue::Integer(SENTINEL)));
    }

    #[test]
    fn closed_windows_keep_their_order() {
        let part = activity_part(&Activity {
            num_commits: Some(1),
            open_issues_and_pr_now: Some(2),
            closed_issues_and_pr: Some([80, 40, 20, 5]),
        });
        assert_eq!(part.get(CLOSED_TWO_YEAR), Some(&FieldValue::Integer(80)));
        assert_eq!(part.get(CLOSED_ONE_MONTH), Some(&FieldValue::Integer(5)));
    }
}
