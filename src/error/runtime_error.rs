use thiserror::Error;

/// Represents all errors that can occur while combining operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Character index of the `/` operator.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error at position {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Character index of the operator whose result overflowed.
        position: usize,
    },
}

impl RuntimeError {
    /// Zero-based character position the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}
