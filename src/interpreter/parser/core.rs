use tracing::trace;

use crate::{
    error::{EvalResult, ParseError, ParseResult, parse_error::Expected},
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// Recursive-descent evaluator over a lexer.
///
/// The parser never builds a tree. Each grammar rule returns the value of the
/// text it consumed, so evaluation happens while parsing. After any rule
/// returns successfully, [`Parser::current_token`] is the first token not yet
/// consumed.
///
/// Grammar:
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := INTEGER | "(" expr ")"
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    lexer:         Lexer,
    current_token: Token,
    depth:         usize,
}

/// Deepest parenthesis nesting accepted before parsing is abandoned.
///
/// Every level costs three stack frames (`factor`, `expr`, `term`).
pub const MAX_NESTING: usize = 256;

impl Parser {
    /// Wraps `lexer` and primes the lookahead with its first token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be read.
    pub fn new(mut lexer: Lexer) -> ParseResult<Self> {
        let current_token = lexer.get_next_token()?;
        Ok(Self { lexer,
                  current_token,
                  depth: 0 })
    }

    /// The lookahead token.
    #[must_use]
    pub const fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Consumes the current token if it has the `expected` kind.
    ///
    /// On success the lookahead is replaced by the next token from the lexer.
    /// This is the only place where the parser advances.
    ///
    /// # Errors
    /// - `ParseError::Syntax` if the current token has another kind.
    /// - Any lexical error raised while fetching the next token.
    pub fn eat(&mut self, expected: TokenKind) -> EvalResult<()> {
        if self.current_token.kind != expected {
            return Err(self.unexpected(Expected::Token(expected)).into());
        }
        trace!(token = %self.current_token, "consumed");
        self.current_token = self.lexer.get_next_token()?;
        Ok(())
    }

    /// Records one more open parenthesis.
    pub(in crate::interpreter::parser) fn enter_group(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING,
                                                    position: self.current_token.position, });
        }
        self.depth += 1;
        Ok(())
    }

    /// Records that a parenthesized group was closed.
    pub(in crate::interpreter::parser) const fn leave_group(&mut self) {
        self.depth -= 1;
    }

    /// Builds a syntax error describing the current token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: Expected) -> ParseError {
        ParseError::Syntax { expected,
                             found: self.current_token.kind,
                             position: self.current_token.position }
    }
}
