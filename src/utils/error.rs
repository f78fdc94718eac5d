use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("cannot select a mold from an empty candidate list")]
    EmptyCandidateSet,

    #[error("no active molds available in the catalog")]
    NoMoldsAvailable,

    #[error("catalog request failed: {0}")]
    CatalogError(#[from] reqwest::Error),

    #[error("catalog CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, MatchError>;
