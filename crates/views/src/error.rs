use thiserror::Error;

/// Errors that can occur when validating a view configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least two samples are required, got {0}")]
    TooFewSamples(usize),

    #[error("samples must be strictly increasing")]
    NotIncreasing,

    #[error("configuration values must be finite")]
    NonFinite,

    #[error("window must have a finite, positive width and height")]
    EmptyWindow,

    #[error("at least one contour level is required")]
    NoContours,
}
