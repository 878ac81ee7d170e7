use crate::collect::MetadataPart;
use crate::error::{RankError, Result};
use serde::Deserialize;

pub const IS_VALID_LICENSE: &str = "is_valid_license";

/// Contributor agreements are detected as a license but grant no usage rights.
const CONTRIBUTOR_AGREEMENT: &str = "generic-cla";

#[derive(Debug, Deserialize)]
struct ScanReport {
    #[serde(default)]
    files: Vec<ScannedFile>,
}

#[derive(Debug, Deserialize)]
struct ScannedFile {
    #[serde(default)]
    license_expressions: Vec<String>,
}

pub fn has_valid_license(json: &str) -> Result<bool> {
    let report: ScanReport = serde_json::from_str(json)
        .map_err(|e| RankError::Collect(format!("scancode report: {e}")))?;
    let Some(file) = report.files.first() else {
        return Ok(false);
    };
    Ok(!file.license_expressions.is_empty()
        && !file
            .license_expressions
            .iter()
            .any(|expression| expression == CONTRIBUTOR_AGREEMENT))
}

/// `None` means no license file was scanned, which counts as unlicensed.
pub fn license_part(json: Option<&str>) -> Result<MetadataPart> {
    let valid = match json {
        Some(json) => has_valid_license(json)?,
        None => false,
    };
    Ok(MetadataPart::new().integer(IS_VALID_LICENSE, i64::from(valid)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::FieldValue;

    #[test]
    fn recognised_expression_is_valid() {
        let json = r#"{"files": [{"path": "LICENSE", "license_expressions": ["apache-2.0"]}]}"#;
        assert!(has_valid_license(json).expect("report should parse"));
    }

    #[test]
    fn contributor_agreement_is_not_a_license() {
        let json = r#"{"files": [{"license_expressions": ["mit", "generic-cla"]}]}"#;
        assert!(!has_valid_license(json).expect("report should parse"));
    }

    #[test]
    fn empty_scan_is_not_a_license() {
        assert!(!has_valid_license(r#"{"files": [{"license_expressions": []}]}"#)
            .expect("report should parse"));
        assert!(!has_valid_license(r#"{"files": []}"#).expect("report should parse"));
    }

    #[test]
    fn missing_scan_counts_as_unlicensed() {
        let part = license_part(None).expect("part should build");
        assert_eq!(part.get(IS_VALID_LICENSE), Some(&FieldValue::Integer(0)));
    }

    #[test]
    fn broken_json_is_a_collect_error() {
        let err = license_part(Some("{")).expect_err("bad json should fail");
        assert!(err.to_string().contains("scancode report"));
    }
}
