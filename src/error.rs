//! Error type shared by the text-generation primitives.

/// Errors produced by numeral spelling and count description.
///
/// Non-convergence of the fixpoint search is not an error; it is reported
/// in-band through [`crate::fixpoint::FixpointResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The caller passed a value the operation cannot handle.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GeneratorError {
    /// Build a [`GeneratorError::InvalidArgument`] from any displayable reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}
