/// The parser state and its token-consumption primitive.
///
/// Holds the lexer being driven and the single lookahead token, and defines
/// `eat`, the only way grammar rules advance through the input.
pub mod core;

/// Binary operator rules.
///
/// Implements the two left-associative precedence levels: `expr` for `+` and
/// `-`, `term` for `*` and `/`.
pub mod binary;

/// Primary expressions.
///
/// Integer literals and parenthesized sub-expressions, the highest
/// precedence level.
pub mod primary;

pub use self::core::Parser;
