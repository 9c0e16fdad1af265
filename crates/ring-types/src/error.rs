/// Errors from parsing a partition ratio string such as `"1:2:1"`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatioError {
    #[error("ratio token {index} is empty")]
    EmptyToken { index: usize },

    #[error("ratio token {token:?} is not a number")]
    NotANumber { token: String },

    #[error("ratio token {token:?} must be positive")]
    NonPositive { token: String },

    #[error("ratio has {found} parts but partition count is {expected}")]
    CountMismatch { expected: usize, found: usize },
}

/// Errors while loading or checking a ring configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse ring config: {0}")]
    Parse(String),

    #[error("failed to serialize ring config: {0}")]
    Serialize(String),

    #[error("{parameter} must be a positive finite number, got {value}")]
    InvalidDimension { parameter: &'static str, value: f64 },

    #[error("groove position {0} is outside [0, 1]")]
    GroovePosition(f64),

    #[error("partition count {0} is outside 1..=3")]
    PartitionCount(u8),

    #[error(transparent)]
    Ratio(#[from] RatioError),
}
