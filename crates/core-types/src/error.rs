use thiserror::Error;

/// Every way a calculation, analysis or history request can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// An input value is NaN or infinite.
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    /// A divisor's magnitude is below the near-zero threshold.
    #[error("Division by zero: {0}")]
    DivideByZero(String),

    /// The operation is mathematically undefined for the given input.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A computation on finite inputs produced an infinite result.
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Malformed structural input (empty sample, blank label, bad index, wrong arity).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
