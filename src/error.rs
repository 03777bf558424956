/// Parsing errors.
///
/// Defines the errors raised while turning source text into tokens and while
/// matching tokens against the grammar: unrecognized characters, unexpected
/// tokens, integer literals that do not fit the value range and excessive
/// parenthesis nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while combining operands: division by zero and
/// arithmetic overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Result type used by the lexer.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type used by every stage of an evaluation.
///
/// All grammar rules return either a value of type `T` or an `EvalError`
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Any failure that can abort the evaluation of a single line.
///
/// Lexing, parsing and arithmetic are interleaved, so a parser rule can fail
/// with either category. The wrapped error carries the position and the
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The text could not be tokenized or did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was well-formed but an operation on its values failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EvalError {
    /// Zero-based character position the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}
