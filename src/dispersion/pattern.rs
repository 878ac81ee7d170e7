use crate::error::{RankError, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub contributor: String,
    pub count: f64,
}

/// One trie-dump line: `pattern,total,contributors,id;count,...`.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRow {
    pub line: u64,
    pub pattern: String,
    pub total_count: f64,
    /// As declared by the dump; informational only.
    pub declared_contributors: Option<u64>,
    pub contributions: Vec<Contribution>,
}

impl PatternRow {
    pub fn parse<'a>(line: u64, fields: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut fields = fields.into_iter();
        let pattern = fields.next().unwrap_or_default().to_string();
        let total_count = match fields.next() {
            Some(raw) => parse_count(line, raw)?,
            None => 0.0,
        };
        let declared_contributors = fields.next().and_then(|raw| raw.trim().parse::<u64>().ok());
        let contributions = fields
            .map(|field| parse_pair(line, field))
            .collect::<Result<Vec<_>>>()?;

        if !contributions.is_empty() && total_count == 0.0 {
            return Err(RankError::ZeroTotal { line });
        }

        Ok(Self {
            line,
            pattern,
            total_count,
            declared_contributors,
            contributions,
        })
    }

    pub fn shares(&self) -> Vec<f64> {
        self.contributions
            .iter()
            .map(|contribution| contribution.count / self.total_count * 100.0)
            .collect()
    }
}

fn parse_count(line: u64, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|count| count.is_finite())
        .ok_or_else(|| RankError::InvalidNumber {
            location: format!("line {line}"),
            field: "count".to_string(),
            value: raw.to_string(),
        })
}

fn parse_pair(line: u64, field: &str) -> Result<Contribution> {
    let (contributor, count) = field.split_once(';').ok_or_else(|| RankError::MalformedPair {
        line,
        field: field.to_string(),
    })?;
    Ok(Contribution {
        contributor: contributor.trim_start_matches('(').to_string(),
        count: parse_count(line, count.trim_end_matches(')'))?,
    })
}

pub fn parse_pattern_rows(bytes: &[u8]) -> Result<Vec<PatternRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|position| position.line()).unwrap_or(0);
        rows.push(PatternRow::parse(line, record.iter())?);
    }
    Ok(rows)
}

pub fn read_pattern_rows(path: &Path) -> Result<Vec<PatternRow>> {
    if !path.exists() {
        return Err(RankError::PathNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    parse_pattern_rows(&bytes)
}
