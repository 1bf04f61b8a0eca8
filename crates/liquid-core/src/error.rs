use thiserror::Error;

/// Rejected configuration. Raised once at construction; the frame path never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("button {axis} must be a positive finite number, got {value}")]
    InvalidDimension { axis: &'static str, value: f64 },
    #[error("{field} must not be empty")]
    EmptyColor { field: &'static str },
    #[error("at least one edge subdivision is required, got {0}")]
    TooFewPoints(usize),
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("damping must lie strictly between 0 and 1, got {0}")]
    DampingOutOfRange(f64),
    #[error("speed sampling interval must fit a browser timer, got {0}ms")]
    IntervalOutOfRange(u32),
}
