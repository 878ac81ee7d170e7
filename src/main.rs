mod cli;
mod collect;
mod config;
mod dispersion;
mod error;
mod logging;
mod rank;
mod report;
mod table;
mod types;

use crate::collect::{complexity, github, license, security, style, RepoMetadata};
use crate::error::RankError;
use crate::types::config::DEFAULT_LOG_LEVEL;
use crate::types::report::RankingReport;
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use std::fs;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const EMPTY_RESULT: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn run() -> Result<i32, RankError> {
    let cli = cli::Cli::parse();
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let configured_level = loaded
        .as_ref()
        .map_or(DEFAULT_LOG_LEVEL, |cfg| cfg.log_level());
    logging::init(logging::level_for(cli.verbose, cli.quiet, configured_level));

    match cli.command {
        cli::Commands::Rank(cmd) => {
            let table = table::read_metric_table(&cmd.csv_file)?;
            let records_read = table.records.len();
            tracing::info!(
                records = records_read,
                sources = table.sources.len(),
                "read metadata table"
            );

            let mut options = rank::RankOptions::from_config(loaded.as_ref());
            options.normalize_quality_by_nloc |= cmd.normalize_quality;
            let ranking = rank::rank_records(table.records, &options)?;

            let detailed = cmd.detailed || loaded.as_ref().is_some_and(|cfg| cfg.detailed());
            table::write_ranked_file(&cmd.output_csv_file, &ranking.records, detailed)?;
            tracing::info!(
                ranked = ranking.records.len(),
                dropped = ranking.dropped.len(),
                output = %cmd.output_csv_file.display(),
                "wrote ranked table"
            );

            let ranking_report = RankingReport {
                generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                input_digest: table.digest,
                sources: table
                    .sources
                    .iter()
                    .map(|source| source.display().to_string())
                    .collect(),
                output: cmd.output_csv_file.display().to_string(),
                records_read,
                ranked: ranking.entries(),
                dropped: ranking.dropped,
                spans: ranking.spans,
            };
            let output_format = match cmd.format {
                cli::RankFormat::Json => report::OutputFormat::Json,
                cli::RankFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render_ranking(&ranking_report, output_format)?);

            if ranking_report.ranked.is_empty() {
                tracing::warn!("no rankable records in {}", cmd.csv_file.display());
                Ok(exit_code::EMPTY_RESULT)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Dispersion(cmd) => {
            let rows = dispersion::pattern::read_pattern_rows(&cmd.path)?;
            let summary = dispersion::summarize(&rows);
            let output_format = match cmd.format {
                cli::DispersionFormat::Json => report::SummaryFormat::Json,
                cli::DispersionFormat::Text => report::SummaryFormat::Text,
            };
            println!("{}", report::render_dispersion(&summary, output_format)?);

            if summary.pstdev.is_none() {
                tracing::warn!(
                    skipped = summary.rows_without_contributors,
                    "no pattern rows with contributors"
                );
                Ok(exit_code::EMPTY_RESULT)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Collect(cmd) => {
            let metadata = collect_metadata(&cmd)?;
            metadata.write_csv(std::io::stdout().lock(), !cmd.no_header)?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn read_input(path: &Path) -> Result<String, RankError> {
    fs::read_to_string(path)
        .map_err(|e| RankError::Collect(format!("cannot read {}: {e}", path.display())))
}

fn collect_metadata(cmd: &cli::CollectCommand) -> Result<RepoMetadata, RankError> {
    let mut metadata = RepoMetadata::default();
    metadata.merge(collect::identity_part(&cmd.repo_url)?);

    metadata.merge(match &cmd.repository_json {
        Some(path) => github::repository_part(&read_input(path)?, Utc::now())?,
        None => collect::MetadataPart::unavailable(&github::REPOSITORY_FIELDS),
    });

    let closed_issues_and_pr = match cmd.closed_issues.as_deref() {
        None => None,
        Some(&[two_year, one_year, six_months, one_month]) => {
            Some([two_year, one_year, six_months, one_month])
        }
        Some(other) => {
            return Err(RankError::Collect(format!(
                "--closed-issues takes four counts (2y,1y,6m,1m), got {}",
                other.len()
            )))
        }
    };
    metadata.merge(github::activity_part(&github::Activity {
        num_commits: cmd.num_commits,
        open_issues_and_pr_now: cmd.open_issues,
        closed_issues_and_pr,
    }));

    metadata.merge(match &cmd.complexity_json {
        Some(path) => {
            let report = complexity::parse_report(&read_input(path)?)?;
            complexity::complexity_part(&report)
        }
        None => complexity::complexity_part(&complexity::ComplexityReport { files: Vec::new() }),
    });

    metadata.merge(match (&cmd.cpplint_log, cmd.cpplint_nloc) {
        (Some(path), Some(nloc)) => style::style_part(&read_input(path)?, nloc)?,
        _ => style::unavailable_part(),
    });

    let scancode = cmd.scancode_json.as_deref().map(read_input).transpose()?;
    metadata.merge(license::license_part(scancode.as_deref())?);

    metadata.merge(match (&cmd.flawfinder_sarif, &cmd.flawfinder_stats) {
        (Some(sarif), Some(stats)) => {
            security::security_part(&read_input(sarif)?, &read_input(stats)?)?
        }
        _ => security::unavailable_part(),
    });

    tracing::info!(repository = %cmd.repo_url, "collected repository metadata");
    Ok(metadata)
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
