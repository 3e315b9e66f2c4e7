use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecourtError {
    #[error("listing '{0}' not found")]
    ListingNotFound(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("year {year} is out of range ({min}-{max})")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("{field} must be a non-negative number, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("invalid spec '{0}': expected LABEL=VALUE")]
    InvalidSpec(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown config key '{0}'")]
    UnknownConfigKey(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForecourtError>;
