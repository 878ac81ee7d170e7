use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("{location}: missing field `{field}`")]
    MissingField { location: String, field: String },

    #[error("{location}: field `{field}` is not a number: {value:?}")]
    InvalidNumber {
        location: String,
        field: String,
        value: String,
    },

    #[error("line {line}: malformed contributor pair {field:?} (expected `id;count`)")]
    MalformedPair { line: u64, field: String },

    #[error("line {line}: total contribution count is zero but contributors are listed")]
    ZeroTotal { line: u64 },

    #[error("collect error: {0}")]
    Collect(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RankError>;
