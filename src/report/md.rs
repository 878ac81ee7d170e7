use crate::types::number::format_number;
use crate::types::report::RankingReport;

pub fn to_markdown(report: &RankingReport) -> String {
    let mut output = String::new();
    output.push_str("# Repository Ranking\n\n");
    output.push_str(&format!(
        "- generated: {}\n- input: {} ({} file(s), sha256 {})\n- output: {}\n",
        report.generated_at,
        report.sources.join(", "),
        report.sources.len(),
        report.input_digest,
        report.output
    ));
    output.push_str(&format!(
        "- records: {} read, {} ranked, {} dropped\n\n",
        report.records_read,
        report.ranked.len(),
        report.dropped.len()
    ));

    output.push_str("## Ranking\n\n");
    if report.ranked.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| rank | repository | overall | popularity | maintainability | quality |\n");
        output.push_str("|---:|---|---:|---:|---:|---:|\n");
        for entry in &report.ranked {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                entry.rank,
                entry.repository_owner,
                format_number(entry.scores.overall),
                format_number(entry.scores.popularity),
                format_number(entry.scores.maintainability),
                format_number(entry.scores.quality)
            ));
        }
        output.push('\n');
    }

    output.push_str("## Dropped\n\n");
    if report.dropped.is_empty() {
        output.push_str("- none\n");
    } else {
        for dropped in &report.dropped {
            output.push_str(&format!(
                "- {} ({}): {}\n",
                dropped.repository, dropped.location, dropped.reason
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{DropReason, DroppedRecord, RankEntry};
    use crate::types::scoring::ScoreBundle;

    fn report(ranked: Vec<RankEntry>, dropped: Vec<DroppedRecord>) -> RankingReport {
        RankingReport {
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            input_digest: "abc".to_string(),
            sources: vec!["repos.csv".to_string()],
            output: "ranked.csv".to_string(),
            records_read: ranked.len() + dropped.len(),
            ranked,
            dropped,
            spans: vec![],
        }
    }

    #[test]
    fn markdown_report_lists_ranked_repositories() {
        let rendered = to_markdown(&report(
            vec![RankEntry {
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
            vec![],
        ));
        assert!(rendered.contains("# Repository Ranking"));
        assert!(rendered.contains("| 1 | acme_widgets | 58.67 | 100.0 | 51.0 | 25.0 |"));
        assert!(rendered.contains("## Dropped\n\n- none"));
    }

    #[test]
    fn markdown_report_explains_dropped_records() {
        let rendered = to_markdown(&report(
            vec![],
            vec![DroppedRecord {
                location: "repos.csv:2".to_string(),
                repository: "acme_gadgets".to_string(),
                reason: DropReason::NonPositiveAge { age: 0.0 },
            }],
        ));
        assert!(rendered.contains("## Ranking\n\n- none"));
        assert!(rendered.contains("- acme_gadgets (repos.csv:2): repo_age_in_days is 0"));
    }
}
