//! Error type for generator operations.

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// Sampler input the caller should never have passed (empty lists,
    /// mismatched weights, inverted ranges)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
