use thiserror::Error;

/// Error types for the grblc library.
#[derive(Error, Debug)]
pub enum GrbError {
    /// A declared parameter is not an argument of the wrapped model function.
    #[error("{name} is not a valid argument for the {model} model. Expected one of {expected:?}.")]
    InvalidArgument {
        name: String,
        model: String,
        expected: Vec<String>,
    },

    /// Model plotting/domain bounds must hold exactly x-min, x-max, y-min, y-max.
    #[error("bounds must be a list of length 4, got {0}")]
    BoundsLength(usize),

    /// Error indicating a mismatch in array or parameter vector lengths.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A value fell outside the numeric domain of a computation
    /// (zero standard error, zero smoothing factor, ...).
    #[error("Numeric domain error: {0}")]
    NumericDomain(String),

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error for parameter-related problems.
    #[error("Parameter error: {0}")]
    Parameter(#[from] crate::parameters::ParameterError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::parameters::BoundsError> for GrbError {
    fn from(err: crate::parameters::BoundsError) -> Self {
        GrbError::Parameter(err.into())
    }
}

/// Result type alias for grblc operations.
pub type Result<T> = std::result::Result<T, GrbError>;
