use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// A `Div` node was requested (forward) or differentiated (backward)
    /// with a zero-valued divisor.
    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Invalid sampling range: low {low} must be strictly less than high {high}")]
    InvalidRange { low: f64, high: f64 },
}
