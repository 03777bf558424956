use thiserror::Error;

use crate::interpreter::token::TokenKind;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a character that does not start any token.
    #[error("Error at position {position}: Unrecognized character '{character}'.")]
    Lexical {
        /// The offending character.
        character: char,
        /// Character index in the source.
        position:  usize,
    },
    /// The current token is not the one the grammar requires.
    #[error("Error at position {position}: Expected {expected} but found {found}.")]
    Syntax {
        /// What the grammar rule was looking for.
        expected: Expected,
        /// Kind of the token actually present.
        found:    TokenKind,
        /// Character index of the found token.
        position: usize,
    },
    /// An integer literal was too large to be represented safely.
    #[error("Error at position {position}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits as written.
        literal:  String,
        /// Character index of the first digit.
        position: usize,
    },
    /// Parentheses were nested deeper than the parser accepts.
    #[error("Error at position {position}: Parentheses nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum accepted depth.
        limit:    usize,
        /// Character index of the first `(` beyond the limit.
        position: usize,
    },
}

impl ParseError {
    /// Zero-based character position the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lexical { position, .. }
            | Self::Syntax { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// What a grammar rule expected to see when it raised a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token kind, as required by `eat`.
    Token(TokenKind),
    /// The start of a factor: an integer or `(`.
    Operand,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::Operand => write!(f, "an integer or '('"),
        }
    }
}
