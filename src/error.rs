use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreError {
    #[error("reorder on {date}: index {index} out of range for {len} notes")]
    IndexOutOfRange {
        date: NaiveDate,
        index: usize,
        len: usize,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("unsupported log level `{0}`")]
    InvalidLogLevel(String),
    #[error("expected a boolean for `{key}`, got `{value}`")]
    InvalidBool { key: &'static str, value: String },
    #[error("unsupported week start `{0}` (expected sunday or monday)")]
    InvalidWeekStart(String),
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum SeedError {
    #[error("seed notes are not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("seed offset {0} days is outside the supported date range")]
    OffsetOutOfRange(i64),
}
