use crate::error::{RankError, Result};
use crate::types::number::format_number;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Integer(value) => *value as f64,
            Self::Number(value) => *value,
        };
        value.is_finite().then_some(value)
    }

    pub fn is_raw(&self, raw: &str) -> bool {
        matches!(self, Self::Text(text) if text == raw)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => f.write_str(&format_number(*value)),
        }
    }
}

/// One repository's row: input columns in header order, derived columns
/// appended in the order they were first set.
#[derive(Debug, Clone)]
pub struct MetricRecord {
    location: String,
    fields: Vec<(String, FieldValue)>,
}

impl MetricRecord {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            fields: Vec::new(),
        }
    }

    pub fn from_row<'a>(
        location: impl Into<String>,
        headers: impl IntoIterator<Item = &'a str>,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let fields = headers
            .into_iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), FieldValue::Text(value.to_string())))
            .collect();
        Self {
            fields,
            ..Self::new(location)
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn number(&self, name: &str) -> Result<f64> {
        let value = self.get(name).ok_or_else(|| RankError::MissingField {
            location: self.location.clone(),
            field: name.to_string(),
        })?;
        value.as_number().ok_or_else(|| RankError::InvalidNumber {
            location: self.location.clone(),
            field: name.to_string(),
            value: value.to_string(),
        })
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }

    /// Overwrites in place when `name` exists, appends otherwise.
    pub fn set(&mut self, name: &str, value: f64) {
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, slot)) => *slot = FieldValue::Number(value),
            None => self
                .fields
                .push((name.to_string(), FieldValue::Number(value))),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn sentinel_field(&self, sentinel: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(_, value)| value.is_raw(sentinel))
            .map(|(name, _)| name.as_str())
    }

    pub fn display_name(&self) -> String {
        self.text(crate::types::fields::REPOSITORY_OWNER)
            .filter(|owner| !owner.is_empty())
            .unwrap_or_else(|| self.location.clone())
    }
}
