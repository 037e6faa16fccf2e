/// Error types for the prediction client
use thiserror::Error;

/// Failure taxonomy for a prediction request.
///
/// Exactly one outbound request is made per call; there are no retries,
/// timeouts or cached results, so every failure reduces to one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The request produced no response (transport-level failure)
    #[error("Prediction request failed: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status
    #[error("Prediction endpoint returned status {0}")]
    Status(u16),

    /// The response body was missing or had an invalid prediction field
    #[error("Malformed prediction response: {0}")]
    MalformedResponse(String),
}

/// Type alias for Results using PredictError
pub type Result<T> = std::result::Result<T, PredictError>;
