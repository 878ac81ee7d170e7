use serde::Serialize;

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{
        DispersionStats, DispersionSummary, DropReason, DroppedRecord, RankEntry, RankingReport,
    };
    use crate::types::scoring::ScoreBundle;

    #[test]
    fn ranking_json_uses_score_column_names() {
        let report = RankingReport {
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            input_digest: "abc".to_string(),
            sources: vec!["repos.csv".to_string()],
            output: "ranked.csv".to_string(),
            records_read: 2,
            ranked: vec![RankEntry {
                rank: 1,
                repository_owner: "acme_widgets".to_string(),
                repository_uri: "https://github.com/acme/widgets".to_string(),
                scores: ScoreBundle {
                    popularity: 100.0,
                    maintainability: 51.0,
                    quality: 25.0,
                    overall: 58.67,
                },
            }],
            dropped: vec![DroppedRecord {
                location: "repos.csv:3".to_string(),
                repository: "acme_gadgets".to_string(),
                reason: DropReason::Sentinel {
                    field: "forks_count".to_string(),
                },
            }],
            spans: vec![],
        };

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"overall_score\": 58.67"));
        assert!(rendered.contains("\"kind\": \"sentinel\""));
    }

    #[test]
    fn empty_dispersion_serializes_null_stats() {
        let summary = DispersionSummary {
            rows_counted: 0,
            rows_without_contributors: 3,
            pstdev: None,
        };
        let rendered = to_json(&summary).expect("json should serialize");
        assert!(rendered.contains("\"pstdev\": null"));

        let summary = DispersionSummary {
            rows_counted: 2,
            rows_without_contributors: 0,
            pstdev: Some(DispersionStats {
                avg: 20.0,
                min: 0.0,
                max: 40.0,
            }),
        };
        let rendered = to_json(&summary).expect("json should serialize");
        assert!(rendered.contains("\"max\": 40.0"));
    }
}
