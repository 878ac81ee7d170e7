//! Assembles one repository's metadata row from captured tool outputs.
//!
//! Every step returns its own [`MetadataPart`]; the caller merges them in
//! a fixed order, so no step sees another step's state.

pub mod complexity;
pub mod github;
pub mod license;
pub mod security;
pub mod style;

use crate::error::{RankError, Result};
use crate::types::fields::{REPOSITORY_OWNER, REPOSITORY_URI};
use crate::types::record::FieldValue;
use std::io::Write;

pub const SENTINEL: i64 = -1;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataPart {
    fields: Vec<(String, FieldValue)>,
}

impl MetadataPart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: FieldValue) -> Self {
        self.fields.push((name.to_string(), value));
        self
    }

    pub fn integer(self, name: &str, value: i64) -> Self {
        self.with(name, FieldValue::Integer(value))
    }

    pub fn number(self, name: &str, value: f64) -> Self {
        self.with(name, FieldValue::Number(value))
    }

    pub fn text(self, name: &str, value: impl Into<String>) -> Self {
        self.with(name, FieldValue::Text(value.into()))
    }

    pub fn unavailable(names: &[&str]) -> Self {
        names
            .iter()
            .fold(Self::new(), |part, name| part.integer(name, SENTINEL))
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepoMetadata {
    fields: Vec<(String, FieldValue)>,
}

impl RepoMetadata {
    /// Later parts overwrite fields of the same name in place.
    pub fn merge(&mut self, part: MetadataPart) {
        for (name, value) in part.fields {
            match self.fields.iter_mut().find(|(field, _)| *field == name) {
                Some((_, slot)) => *slot = value,
                None => self.fields.push((name, value)),
            }
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn write_csv<W: Write>(&self, out: W, header: bool) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        if header {
            writer.write_record(self.field_names())?;
        }
        writer.write_record(self.fields.iter().map(|(_, value)| value.to_string()))?;
        writer.flush()?;
        Ok(())
    }
}

/// `repository_owner` is `<owner>_<repo>` taken from
/// `https://github.com/<owner>/<repo>`.
pub fn identity_part(repo_url: &str) -> Result<MetadataPart> {
    let segments = repo_url.trim_end_matches('/').split('/').collect::<Vec<_>>();
    match (segments.get(3), segments.get(4)) {
        (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok(MetadataPart::new()
                .text(REPOSITORY_OWNER, format!("{owner}_{repo}"))
                .text(REPOSITORY_URI, repo_url))
        }
        _ => Err(RankError::Collect(format!(
            "repository URL must look like https://github.com/<owner>/<repo>: {repo_url}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_joins_owner_and_repository() {
        let part = identity_part("https://github.com/acme/widgets").expect("url should parse");
        assert_eq!(
            part.get(REPOSITORY_OWNER),
            Some(&FieldValue::Text("acme_widgets".to_string()))
        );
    }

    #[test]
    fn identity_rejects_short_urls() {
        assert!(identity_part("https://github.com/acme").is_err());
        assert!(identity_part("widgets").is_err());
    }

    #[test]
    fn merge_keeps_first_seen_order_and_overwrites() {
        let mut metadata = RepoMetadata::default();
        metadata.merge(MetadataPart::new().integer("a", 1).integer("b", 2));
        metadata.merge(MetadataPart::new().integer("c", 3).integer("a", 9));
        assert_eq!(metadata.field_names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(metadata.get("a"), Some(&FieldValue::Integer(9)));
    }

    #[test]
    fn write_csv_emits_header_and_row() {
        let mut metadata = RepoMetadata::default();
        metadata.merge(
            MetadataPart::new()
                .text("repository_owner", "acme_widgets")
                .integer("forks_count", 4)
                .number("style_errors_per_nloc", 0.012),
        );
        let mut out = Vec::new();
        metadata.write_csv(&mut out, true).expect("csv should write");
        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "repository_owner,forks_count,style_errors_per_nloc\nacme_widgets,4,0.012\n"
        );

        let mut row_only = Vec::new();
        metadata.write_csv(&mut row_only, false).expect("csv should write");
        assert_eq!(
            String::from_utf8(row_only).expect("utf-8"),
            "acme_widgets,4,0.012\n"
        );
    }

    #[test]
    fn unavailable_marks_every_field_with_the_sentinel() {
        let part = MetadataPart::unavailable(&["x", "y"]);
        assert_eq!(part.get("y"), Some(&FieldValue::Integer(SENTINEL)));
    }
}
