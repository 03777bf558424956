use crate::{error::EvalResult, interpreter::parser::Parser};

/// Drives a parser over one line of input.
///
/// The interpreter owns no state beyond its parser; it exists so the
/// evaluation of a whole line has a single entry point.
#[derive(Debug, Clone)]
pub struct Interpreter {
    parser: Parser,
}

impl Interpreter {
    /// Wraps a primed parser.
    #[must_use]
    pub const fn new(parser: Parser) -> Self {
        Self { parser }
    }

    /// Evaluates the expression at the start of the input.
    ///
    /// Tokens after the end of the expression are left unread.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or runtime error encountered.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::{core::Interpreter, lexer::Lexer, parser::Parser};
    ///
    /// let parser = Parser::new(Lexer::new("(2 + 3) * 4")).unwrap();
    /// assert_eq!(Interpreter::new(parser).interpret().unwrap(), 20);
    /// ```
    pub fn interpret(&mut self) -> EvalResult<i64> {
        self.parser.expr()
    }

    /// The parser being driven.
    #[must_use]
    pub const fn parser(&self) -> &Parser {
        &self.parser
    }
}
