use thiserror::Error;

/// Errors raised while building or normalizing set expressions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BorelError {
    #[error("Cannot normalize an intersection with no children")]
    EmptyIntersection,

    #[error("Interval endpoint {0} lies outside [0, 1]")]
    EndpointOutOfRange(f64),

    #[error("Interval endpoint must be a finite number")]
    NonFiniteEndpoint,
}
