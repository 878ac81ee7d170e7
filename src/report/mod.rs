pub mod json;
pub mod md;
pub mod text;

use crate::error::{RankError, Result};
use crate::types::report::{DispersionSummary, RankingReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Copy)]
pub enum SummaryFormat {
    Json,
    Text,
}

pub fn render_ranking(report: &RankingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RankError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_dispersion(summary: &DispersionSummary, format: SummaryFormat) -> Result<String> {
    match format {
        SummaryFormat::Json => json::to_json(summary).map_err(RankError::Json),
        SummaryFormat::Text => Ok(text::to_text(summary)),
    }
}
