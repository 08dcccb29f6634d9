use crate::sets::BorelError;
use thiserror::Error;

/// Errors raised while generating a sigma-algebra from a family of sets.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClosureError {
    #[error("Failed to normalize a family member: {0}")]
    Normalize(#[from] BorelError),

    #[error("Closure did not converge within {limit} passes")]
    PassLimitExceeded { limit: usize },
}
